//! Error types for weekplan
//!
//! Centralized error handling using thiserror. Only fatal conditions live here;
//! ineligible adjustments, catalog warnings and placement shortfalls are status
//! values or log lines, never errors.

use thiserror::Error;

/// All error types that can occur while building a week plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Task configuration missing, unreadable or inconsistent.
    #[error("Config error: {0}")]
    Config(String),

    /// Catalog file could not be admitted.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Malformed amount or day-span value.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Date not in DD-Mon-YYYY form.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Delimited file read/write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for weekplan operations.
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = PlanError::Config("no task configuration found".to_string());
        assert_eq!(err.to_string(), "Config error: no task configuration found");
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = PlanError::InvalidAmount("expected 1 or 2 values, got 3".to_string());
        assert_eq!(err.to_string(), "Invalid amount: expected 1 or 2 values, got 3");
    }

    #[test]
    fn test_invalid_date_error() {
        let err = PlanError::InvalidDate("2024-05-27".to_string());
        assert_eq!(err.to_string(), "Invalid date: 2024-05-27");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PlanError = io_err.into();
        assert!(matches!(err, PlanError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: PlanError = json_err.into();
        assert!(matches!(err, PlanError::Json(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<u32> {
            Ok(7)
        }

        fn returns_err() -> Result<u32> {
            Err(PlanError::Catalog("inconsistent columns".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
