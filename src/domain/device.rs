use crate::utils::error::{CatalogError, Result};
use serde::Serialize;
use std::fmt;
use std::hash::Hasher;
use std::io::{self, Write};
use std::str::FromStr;

/// What a device is for. Every device kind has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Learning,
    Talking,
    Music,
}

impl Purpose {
    pub const ALL: [Purpose; 3] = [Purpose::Learning, Purpose::Talking, Purpose::Music];

    pub const fn as_str(self) -> &'static str {
        match self {
            Purpose::Learning => "learning",
            Purpose::Talking => "talking",
            Purpose::Music => "music",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::invalid_argument(
                "purpose",
                "Purpose cannot be empty",
            ));
        }
        Purpose::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                CatalogError::invalid_argument(
                    "purpose",
                    format!("Unknown purpose '{}', expected one of: learning, talking, music", trimmed),
                )
            })
    }
}

/// The description every device starts from.
pub fn describe_purpose(purpose: Purpose) -> String {
    format!("The purpose of this device is: {}", purpose)
}

/// Common capability of every catalog device.
pub trait Device {
    fn purpose(&self) -> Purpose;

    fn describe(&self) -> String {
        describe_purpose(self.purpose())
    }

    fn write_details(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.describe())
    }

    fn print_details(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_details(&mut handle)
    }
}

/// Hashes a float so that values comparing equal with `==` hash equally.
/// Callers guarantee the value is never NaN.
pub(crate) fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let normalized = if value == 0.0 { 0.0 } else { value };
    state.write_u64(normalized.to_bits());
}
