//! Error handling module for the phoxt CLI.
//!
//! Command handlers return [`PhoxtError`]; `main` wraps it in `anyhow` for
//! the final report.

use phoxc_util::SourceMapError;
use thiserror::Error;

/// Main error type for the phoxt CLI application.
#[derive(Error, Debug)]
pub enum PhoxtError {
    /// A configuration file is missing or cannot be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation failed (missing files, bad arguments).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A command ran but its result is a failure, e.g. `check` found problems.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    #[error(transparent)]
    SourceMap(#[from] SourceMapError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PhoxtError.
pub type Result<T> = std::result::Result<T, PhoxtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = PhoxtError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = PhoxtError::Validation("no input files".to_string());
        assert_eq!(err.to_string(), "Validation error: no input files");
    }

    #[test]
    fn test_command_execution_error_display() {
        let err = PhoxtError::CommandExecution("1 file(s) have problems".to_string());
        assert_eq!(
            err.to_string(),
            "Command execution failed: 1 file(s) have problems"
        );
    }

    #[test]
    fn test_source_map_error_is_transparent() {
        let err: PhoxtError = SourceMapError::FileNotFound("FileId(3)".to_string()).into();
        assert_eq!(err.to_string(), "File not found: FileId(3)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PhoxtError = io_err.into();
        assert!(matches!(err, PhoxtError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: PhoxtError = json_err.into();
        assert!(matches!(err, PhoxtError::Json(_)));
    }
}
