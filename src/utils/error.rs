use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::SerializationError(_) => ErrorCategory::Data,
            CatalogError::TomlError(_)
            | CatalogError::ConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 權限或磁碟問題，重試通常無效
            CatalogError::IoError(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                ErrorSeverity::Critical
            }
            CatalogError::IoError(_) => ErrorSeverity::Medium,
            CatalogError::SerializationError(_) => ErrorSeverity::High,
            CatalogError::TomlError(_)
            | CatalogError::ConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CatalogError::IoError(_) => {
                "Check that the data and log paths exist and are writable".to_string()
            }
            CatalogError::SerializationError(_) => {
                "The catalog file is not a valid JSON array of {\"title\", \"author\"} objects; fix or remove it".to_string()
            }
            CatalogError::TomlError(_) => "Check the TOML syntax of the config file".to_string(),
            CatalogError::ConfigError { .. } => "Review the configuration values".to_string(),
            CatalogError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Data => format!("Catalog data is corrupted: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_categories() {
        let not_found = CatalogError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(not_found.category(), ErrorCategory::Io);
        assert_eq!(not_found.severity(), ErrorSeverity::Medium);

        let denied =
            CatalogError::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert_eq!(denied.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_serialization_error_is_data() {
        let err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = CatalogError::from(err);
        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.user_friendly_message().starts_with("Catalog data is corrupted"));
    }

    #[test]
    fn test_config_error_suggestion_names_field() {
        let err = CatalogError::InvalidConfigValueError {
            field: "storage.data_file".to_string(),
            value: "books.csv".to_string(),
            reason: "Unsupported file extension: csv".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("storage.data_file"));
    }
}
