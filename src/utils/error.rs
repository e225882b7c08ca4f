use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid argument for {field}: {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl CatalogError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Prefixes the offending field, e.g. `carrier` becomes `devices[2].carrier`.
    pub fn in_context(self, prefix: &str) -> Self {
        match self {
            Self::InvalidArgument { field, message } => Self::InvalidArgument {
                field: format!("{}.{}", prefix, field),
                message,
            },
            other => other,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, message } => {
                format!("Rejected value for '{}': {}", field, message)
            }
            Self::ConfigError { message } => format!("Catalog file problem: {}", message),
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::TomlError(e) => format!("Catalog file is not valid TOML: {}", e),
            Self::SerializationError(e) => format!("Could not render JSON: {}", e),
            Self::CsvError(e) => format!("Could not render CSV: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "Fix the listed field so it satisfies the device's constraints",
            Self::ConfigError { .. } => "Check the catalog file for unsupported placeholders",
            Self::IoError(_) => "Make sure the catalog path exists and is readable",
            Self::TomlError(_) => {
                "Check the [catalog] table and that every [[devices]] kind is one of: tablet, phone, advanced_phone, media_player"
            }
            Self::SerializationError(_) | Self::CsvError(_) => "Try another --format",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_context_prefixes_invalid_argument() {
        let err = CatalogError::invalid_argument("carrier", "Carrier cannot be empty").in_context("devices[2]");
        match err {
            CatalogError::InvalidArgument { field, .. } => assert_eq!(field, "devices[2].carrier"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_in_context_leaves_other_errors() {
        let err = CatalogError::ConfigError {
            message: "missing".to_string(),
        }
        .in_context("devices[0]");
        assert!(!err.is_invalid_argument());
        assert_eq!(err.to_string(), "Configuration error: missing");
    }

    #[test]
    fn test_unknown_kind_suggests_valid_kinds() {
        let toml_err = toml::from_str::<toml::Table>("kind = ").unwrap_err();
        let err = CatalogError::from(toml_err);
        assert!(err.recovery_suggestion().contains("advanced_phone"));
        assert!(err.user_friendly_message().starts_with("Catalog file is not valid TOML"));
    }
}
