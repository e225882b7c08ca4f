use crate::core::catalog::Catalog;
use crate::domain::advanced_phone::AdvancedPhone;
use crate::domain::media_player::MediaPlayer;
use crate::domain::model::DeviceEntry;
use crate::domain::phone::Phone;
use crate::domain::tablet::Tablet;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_blank, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    pub catalog: CatalogSection,
    #[serde(default)]
    pub devices: Vec<DeviceSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSection {
    pub name: String,
    pub description: Option<String>,
}

/// A device entry as written in the file, before any invariant is checked.
///
/// Counts are read as signed integers so that a negative value is reported
/// against its field instead of as a TOML type error.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceSpec {
    Tablet {
        #[serde(default)]
        has_case: bool,
        os_version: String,
    },
    Phone {
        minutes_remaining: f64,
        carrier: String,
    },
    AdvancedPhone {
        minutes_remaining: f64,
        carrier: String,
        #[serde(default)]
        high_res_camera: bool,
        memory_gb: i64,
    },
    MediaPlayer {
        #[serde(default)]
        song_count: i64,
        max_volume_db: f64,
    },
}

fn to_u32(field: &str, value: i64, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        CatalogError::invalid_argument(field, format!("{} out of range: {}", what, value))
    })
}

impl DeviceSpec {
    pub fn build(self) -> Result<DeviceEntry> {
        let entry: DeviceEntry = match self {
            DeviceSpec::Tablet {
                has_case,
                os_version,
            } => Tablet::new(has_case, os_version)?.into(),
            DeviceSpec::Phone {
                minutes_remaining,
                carrier,
            } => Phone::new(minutes_remaining, carrier)?.into(),
            DeviceSpec::AdvancedPhone {
                minutes_remaining,
                carrier,
                high_res_camera,
                memory_gb,
            } => {
                // below the minimum is left to the constructor's own check
                let memory_gb = to_u32("memory_gb", memory_gb.max(0), "Memory size")?;
                AdvancedPhone::new(minutes_remaining, carrier, high_res_camera, memory_gb)?.into()
            }
            DeviceSpec::MediaPlayer {
                song_count,
                max_volume_db,
            } => {
                let song_count = to_u32("song_count", song_count, "Song count")?;
                MediaPlayer::new(song_count, max_volume_db)?.into()
            }
        };
        Ok(entry)
    }
}

impl CatalogFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading catalog file");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Validates every entry and collects them into a [`Catalog`].
    pub fn into_catalog(self) -> Result<Catalog> {
        self.validate()?;
        let mut catalog = Catalog::new(self.catalog.name);
        if let Some(description) = self.catalog.description {
            catalog.set_description(description);
        }
        for (index, spec) in self.devices.into_iter().enumerate() {
            let entry = spec
                .build()
                .map_err(|e| e.in_context(&format!("devices[{}]", index)))?;
            catalog.push(entry);
        }
        tracing::info!(
            catalog = %catalog.name(),
            devices = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

impl Validate for CatalogFile {
    fn validate(&self) -> Result<()> {
        validate_non_blank("catalog.name", &self.catalog.name)
    }
}
