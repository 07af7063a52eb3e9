use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Invalid input for {field} ({value}): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Product identification failed for {source_ref}: {message}")]
    IdentificationError { source_ref: String, message: String },
}

pub type Result<T> = std::result::Result<T, EstimateError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EstimateError {
    pub fn invalid_input(field: &str, value: f64, reason: &str) -> Self {
        EstimateError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EstimateError::InvalidInput { .. } => ErrorCategory::Input,
            EstimateError::ApiError(_) | EstimateError::IdentificationError { .. } => {
                ErrorCategory::Network
            }
            EstimateError::ConfigError { .. }
            | EstimateError::ConfigValidationError { .. }
            | EstimateError::InvalidConfigValueError { .. }
            | EstimateError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EstimateError::IoError(_)
            | EstimateError::SerializationError(_)
            | EstimateError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路問題可重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => {
                "Weight, volume and declared value must be non-negative numbers"
            }
            EstimateError::ApiError(_) => {
                "Check the product URL and your network connection, then retry"
            }
            EstimateError::IdentificationError { .. } => {
                "Try another product page or pass the product name with --name"
            }
            EstimateError::ConfigError { .. }
            | EstimateError::ConfigValidationError { .. }
            | EstimateError::InvalidConfigValueError { .. }
            | EstimateError::MissingConfigError { .. } => {
                "Review the command line flags and the TOML configuration file"
            }
            EstimateError::IoError(_) => "Make sure the output directory is writable",
            EstimateError::SerializationError(_) | EstimateError::CsvError(_) => {
                "Retry with --formats txt to skip structured exports"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EstimateError::InvalidInput { field, reason, .. } => {
                format!("Cannot calculate the estimate: {} {}", field, reason)
            }
            EstimateError::ApiError(e) => format!("Could not reach the product page: {}", e),
            EstimateError::IdentificationError { source_ref, message } => {
                format!("Could not identify a product from {}: {}", source_ref, message)
            }
            EstimateError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_high_severity() {
        let err = EstimateError::invalid_input("weight_kg", -1.0, "must not be negative");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("weight_kg"));
        assert!(err.user_friendly_message().contains("must not be negative"));
    }

    #[test]
    fn test_identification_error_is_retryable() {
        let err = EstimateError::IdentificationError {
            source_ref: "https://shop.example.com".to_string(),
            message: "HTTP 404".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: EstimateError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
