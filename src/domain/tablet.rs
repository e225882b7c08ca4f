use crate::domain::device::{describe_purpose, Device, Purpose};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_blank;
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// A learning device that may sit in a protective case.
#[derive(Debug, Clone, Serialize)]
pub struct Tablet {
    has_case: bool,
    os_version: String,
}

impl Tablet {
    pub const PURPOSE: Purpose = Purpose::Learning;

    pub fn new(has_case: bool, os_version: impl Into<String>) -> Result<Self> {
        let os_version = os_version.into();
        validate_non_blank("os_version", &os_version)?;
        tracing::debug!(has_case, %os_version, "constructed tablet");
        Ok(Self {
            has_case,
            os_version,
        })
    }

    pub fn toggle_case(&mut self) {
        self.has_case = !self.has_case;
    }

    pub fn has_case(&self) -> bool {
        self.has_case
    }

    pub fn os_version(&self) -> &str {
        &self.os_version
    }

    pub fn set_os_version(&mut self, os_version: impl Into<String>) -> Result<()> {
        let os_version = os_version.into();
        validate_non_blank("os_version", &os_version)?;
        self.os_version = os_version;
        Ok(())
    }
}

impl Device for Tablet {
    fn purpose(&self) -> Purpose {
        Self::PURPOSE
    }

    fn describe(&self) -> String {
        let case = if self.has_case {
            " it has a case"
        } else {
            " it has no case"
        };
        format!(
            "{}{} and is on version {}",
            describe_purpose(self.purpose()),
            case,
            self.os_version
        )
    }
}

// Tablets are identified by their OS version alone.
impl PartialEq for Tablet {
    fn eq(&self, other: &Self) -> bool {
        self.os_version == other.os_version
    }
}

impl Eq for Tablet {}

impl Hash for Tablet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.os_version.hash(state);
    }
}
