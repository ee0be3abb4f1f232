//! Error types for the UGC scripter
//!
//! Provides structured error handling with:
//! - Numeric error codes for machine parsing
//! - User-friendly messages with suggestions
//! - Exit codes for CLI

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for scripter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Numeric error codes for machine parsing and documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    // Configuration errors (1xx)
    ConfigNotFound = 100,
    ConfigParseError = 101,
    ConfigValidation = 102,

    // IO errors (2xx)
    IoRead = 200,
    IoWrite = 201,
    Serialization = 210,

    // Request errors (3xx)
    RequestFieldEmpty = 300,
    DurationOutOfRange = 301,
    UnknownOption = 302,

    // Time input errors (4xx)
    InvalidTimeFormat = 400,

    // Internal errors (9xx)
    InternalError = 900,
}

impl ErrorCode {
    /// Get the string code (e.g., "E100")
    pub fn as_str(&self) -> String {
        format!("E{}", *self as u16)
    }

    /// Get the exit code for CLI (maps to 1-125 range)
    pub fn exit_code(&self) -> i32 {
        match *self as u16 {
            100..=199 => 10, // Config errors
            200..=299 => 20, // IO errors
            300..=399 => 30, // Request errors
            400..=499 => 40, // Time input errors
            900..=999 => 90, // Internal errors
            _ => 1,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for the scripter
#[derive(Error, Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration parse error
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String, field: Option<String> },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    // ─────────────────────────────────────────────────────────────
    // IO Errors
    // ─────────────────────────────────────────────────────────────

    /// File read error
    #[error("Failed to read file: {path}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File write error
    #[error("Failed to write file: {path}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Request Errors
    // ─────────────────────────────────────────────────────────────

    /// A required request field was empty after trimming
    #[error("Request field '{field}' must not be empty")]
    EmptyField { field: String },

    /// Requested duration outside the accepted window
    #[error("Duration {seconds}s is outside the allowed range {min}-{max}s")]
    DurationOutOfRange { seconds: u32, min: u32, max: u32 },

    /// Unrecognised persona, vibe or platform name
    #[error("Unknown {kind} '{value}'. Valid: {valid}")]
    UnknownOption {
        kind: &'static str,
        value: String,
        valid: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Time Input Errors
    // ─────────────────────────────────────────────────────────────

    /// Time input did not match any accepted form
    #[error("Invalid time format: '{input}'")]
    InvalidTimeFormat { input: String },

    // ─────────────────────────────────────────────────────────────
    // Internal Errors
    // ─────────────────────────────────────────────────────────────

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    // ─────────────────────────────────────────────────────────────
    // Error Classification
    // ─────────────────────────────────────────────────────────────

    /// Get the numeric error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::ConfigNotFound { .. } => ErrorCode::ConfigNotFound,
            Error::ConfigParse { .. } => ErrorCode::ConfigParseError,
            Error::ConfigValidation { .. } => ErrorCode::ConfigValidation,
            Error::Config(_) => ErrorCode::ConfigValidation,

            Error::IoRead { .. } => ErrorCode::IoRead,
            Error::IoWrite { .. } => ErrorCode::IoWrite,
            Error::Toml(_) => ErrorCode::Serialization,
            Error::Json(_) => ErrorCode::Serialization,

            Error::EmptyField { .. } => ErrorCode::RequestFieldEmpty,
            Error::DurationOutOfRange { .. } => ErrorCode::DurationOutOfRange,
            Error::UnknownOption { .. } => ErrorCode::UnknownOption,

            Error::InvalidTimeFormat { .. } => ErrorCode::InvalidTimeFormat,

            Error::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Get the exit code for CLI
    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }

    // ─────────────────────────────────────────────────────────────
    // User-Friendly Messages
    // ─────────────────────────────────────────────────────────────

    /// Get a user-friendly suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Error::ConfigNotFound { .. } => Some(
                "Run 'ugc-scripter config init' to create a default configuration file."
            ),
            Error::ConfigParse { .. } => Some(
                "Check your configuration file syntax. Run 'ugc-scripter config validate' to see details."
            ),
            Error::ConfigValidation { .. } => Some(
                "Review the configuration file and fix the invalid values. Run 'ugc-scripter config show' to see defaults."
            ),

            Error::EmptyField { .. } => Some(
                "Pass a non-empty value, e.g. --niche \"meal prep\" --goal \"lose weight\"."
            ),
            Error::DurationOutOfRange { .. } => Some(
                "Pick a duration inside the configured window, e.g. --duration 45s."
            ),
            Error::UnknownOption { .. } => Some(
                "Run 'ugc-scripter personas' to list the available personas."
            ),

            Error::InvalidTimeFormat { .. } => Some(
                "Use seconds (45), units (45s, 1m 30s) or a clock (1:30, 00:01:30)."
            ),

            _ => None,
        }
    }

    /// Format the error for terminal display with colors
    pub fn format_for_terminal(&self) -> String {
        let code = self.code();
        let suggestion = self.suggestion();

        let mut output = format!(
            "\x1b[31mError [{}]\x1b[0m: {}\n",
            code.as_str(),
            self
        );

        if let Some(hint) = suggestion {
            output.push_str(&format!("\n\x1b[33mHint\x1b[0m: {}\n", hint));
        }

        output
    }

    /// Format the error for logging (no colors)
    pub fn format_for_log(&self) -> String {
        let code = self.code();
        format!("[{}] {}", code.as_str(), self)
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Constructors (for ergonomic error creation)
// ─────────────────────────────────────────────────────────────────

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Error::ConfigNotFound {
            path: path.into(),
            source: None,
        }
    }

    /// Create a config validation error with field name
    pub fn config_field_invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ConfigValidation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn empty_field(field: impl Into<String>) -> Self {
        Error::EmptyField { field: field.into() }
    }

    pub fn unknown_option(kind: &'static str, value: impl Into<String>, valid: &[&str]) -> Self {
        Error::UnknownOption {
            kind,
            value: value.into(),
            valid: valid.join(", "),
        }
    }

    pub fn invalid_time_format(input: impl Into<String>) -> Self {
        Error::InvalidTimeFormat { input: input.into() }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_format() {
        assert_eq!(ErrorCode::ConfigNotFound.as_str(), "E100");
        assert_eq!(ErrorCode::RequestFieldEmpty.as_str(), "E300");
        assert_eq!(ErrorCode::InvalidTimeFormat.as_str(), "E400");
        assert_eq!(ErrorCode::InternalError.as_str(), "E900");
    }

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(ErrorCode::ConfigNotFound.exit_code(), 10);
        assert_eq!(ErrorCode::IoRead.exit_code(), 20);
        assert_eq!(ErrorCode::Serialization.exit_code(), 20);
        assert_eq!(ErrorCode::DurationOutOfRange.exit_code(), 30);
        assert_eq!(ErrorCode::InvalidTimeFormat.exit_code(), 40);
        assert_eq!(ErrorCode::InternalError.exit_code(), 90);
    }

    #[test]
    fn test_error_display() {
        let err = Error::ConfigNotFound {
            path: PathBuf::from("/path/to/config.toml"),
            source: None,
        };
        assert!(err.to_string().contains("/path/to/config.toml"));

        let err = Error::DurationOutOfRange { seconds: 120, min: 15, max: 90 };
        assert_eq!(err.to_string(), "Duration 120s is outside the allowed range 15-90s");

        let err = Error::unknown_option("persona", "chef", &["fitness", "beauty"]);
        assert_eq!(err.to_string(), "Unknown persona 'chef'. Valid: fitness, beauty");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::config_not_found("/test").code(), ErrorCode::ConfigNotFound);
        assert_eq!(Error::empty_field("niche").code(), ErrorCode::RequestFieldEmpty);
        assert_eq!(Error::invalid_time_format("soon").code(), ErrorCode::InvalidTimeFormat);
        assert_eq!(
            Error::unknown_option("vibe", "loud", &["bold"]).code(),
            ErrorCode::UnknownOption
        );
    }

    #[test]
    fn test_config_field_invalid() {
        let err = Error::config_field_invalid("logging.level", "Invalid log level 'loud'");
        assert_eq!(err.code(), ErrorCode::ConfigValidation);
        assert_eq!(err.exit_code(), 10);
        assert!(matches!(
            err,
            Error::ConfigValidation { field: Some(ref f), .. } if f == "logging.level"
        ));
    }

    #[test]
    fn test_error_suggestions() {
        let err = Error::config_not_found("/test");
        assert!(err.suggestion().unwrap().contains("config init"));

        let err = Error::invalid_time_format("soon");
        assert!(err.suggestion().unwrap().contains("1:30"));

        assert!(Error::Internal("boom".into()).suggestion().is_none());
    }

    #[test]
    fn test_format_for_terminal() {
        let err = Error::config_not_found("/test/config.toml");
        let formatted = err.format_for_terminal();

        assert!(formatted.contains("E100"));
        assert!(formatted.contains("\x1b[31m"));
        assert!(formatted.contains("Hint"));
    }

    #[test]
    fn test_format_for_log() {
        let err = Error::empty_field("niche");
        let formatted = err.format_for_log();

        assert!(formatted.contains("[E300]"));
        assert!(!formatted.contains("\x1b["));
    }

    #[test]
    fn test_io_errors_keep_path() {
        let err = Error::IoWrite {
            path: PathBuf::from("/readonly/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.code(), ErrorCode::IoWrite);
        assert_eq!(err.exit_code(), 20);
        assert!(err.to_string().contains("/readonly/config.toml"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.code(), ErrorCode::Serialization);
    }
}
