//! Error types for the LMS admin console

use std::{error::Error as StdError, fmt};

/// Main error type for the LMS admin console
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Network error (connection refused, DNS failure, aborted transfer)
    Network(String),

    /// Request timeout
    Timeout {
        /// Timeout duration in milliseconds
        duration_ms: u64,
    },

    /// The backend rejected the credentials or the bearer token
    Unauthorized(String),

    /// Conflict on a unique field (duplicate email and friends)
    Conflict {
        /// Human-readable conflict message
        message: String,
    },

    /// Backend returned a non-success response with a message
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the backend body, or a generic fallback
        message: String,
    },

    /// Not found error
    NotFound {
        /// Resource that was not found
        resource: String,
    },

    /// Serialization error
    Serialization(serde_json::Error),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The message shown to the user for this failure.
    ///
    /// Backend-supplied messages are surfaced verbatim; transport failures
    /// collapse to a generic retry-suggesting message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Io(_) => {
                "Network error: Unable to connect to the server".to_string()
            }
            Self::Timeout { .. } => {
                "Request timed out. Please check your connection or try again later.".to_string()
            }
            Self::Unauthorized(message)
            | Self::Conflict { message }
            | Self::Api { message, .. }
            | Self::Other(message) => message.clone(),
            Self::Validation { message, .. } => message.clone(),
            Self::NotFound { resource } => format!("Not found: {resource}"),
            Self::Serialization(_) | Self::Configuration { .. } => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }

    /// Whether this failure means the session is no longer valid.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::Network(msg) => write!(f, "Network error: {msg}"),
            Self::Timeout { duration_ms } => {
                write!(f, "Request timed out after {duration_ms}ms")
            }
            Self::Unauthorized(msg) => write!(f, "{msg}"),
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Api { status, message } => write!(f, "API error ({status}): {message}"),
            Self::NotFound { resource } => write!(f, "Resource not found: {resource}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
#[allow(
    clippy::uninlined_format_args,
    clippy::missing_errors_doc,
    clippy::unnecessary_wraps,
    clippy::match_same_arms
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = Error::from(io_error);

        match app_error {
            Error::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }

        assert!(format!("{}", app_error).contains("I/O error"));
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "Invalid base URL".to_string(),
        };

        assert_eq!(format!("{}", error), "Configuration error: Invalid base URL");
    }

    #[test]
    fn test_validation_error() {
        let error = Error::Validation {
            field: "password".to_string(),
            message: "Too short".to_string(),
        };

        assert_eq!(format!("{}", error), "Validation error: password - Too short");
    }

    #[test]
    fn test_network_error_user_message() {
        let error = Error::Network("connection refused".to_string());

        assert_eq!(format!("{}", error), "Network error: connection refused");
        assert_eq!(
            error.user_message(),
            "Network error: Unable to connect to the server"
        );
    }

    #[test]
    fn test_timeout_error() {
        let error = Error::Timeout { duration_ms: 10000 };

        assert_eq!(format!("{}", error), "Request timed out after 10000ms");
        assert!(error.user_message().contains("timed out"));
    }

    #[test]
    fn test_unauthorized_error_is_verbatim() {
        let error = Error::Unauthorized("Unauthorized: Invalid credentials".to_string());

        assert!(error.is_unauthorized());
        assert_eq!(format!("{}", error), "Unauthorized: Invalid credentials");
        assert_eq!(error.user_message(), "Unauthorized: Invalid credentials");
    }

    #[test]
    fn test_conflict_error() {
        let error = Error::Conflict {
            message: "This email is already registered".to_string(),
        };

        assert!(!error.is_unauthorized());
        assert_eq!(error.user_message(), "This email is already registered");
    }

    #[test]
    fn test_api_error_surfaces_backend_message() {
        let error = Error::Api {
            status: 500,
            message: "Internal server error".to_string(),
        };

        assert_eq!(format!("{}", error), "API error (500): Internal server error");
        assert_eq!(error.user_message(), "Internal server error");
    }

    #[test]
    fn test_not_found_error() {
        let error = Error::NotFound {
            resource: "course 0123456789abcdef01234567".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Resource not found: course 0123456789abcdef01234567"
        );
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_str = r#"{"invalid": json}"#;
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let app_error = Error::from(json_error);

        match app_error {
            Error::Serialization(_) => {}
            _ => panic!("Expected Serialization error variant"),
        }

        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_error_source_for_non_io_errors() {
        let error = Error::Configuration {
            message: "test".to_string(),
        };
        assert!(error.source().is_none());

        let error = Error::Network("test".to_string());
        assert!(error.source().is_none());

        let error = Error::Unauthorized("test".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(Error::Other("test error".to_string()))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
