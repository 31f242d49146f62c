//! Error types for client configuration.
//!
//! Configuration constructors return `Result<T, ConfigError>` so that an
//! invalid base URL or timeout is rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use lottery_admin::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBaseUrl)));
//! ```

use thiserror::Error;

/// Errors that can occur while building an [`AdminConfig`](crate::AdminConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL cannot be empty.
    #[error("Base URL cannot be empty. Please provide the admin API base URL.")]
    EmptyBaseUrl,

    /// Base URL is missing its scheme or is otherwise malformed.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Request timeout must be greater than zero.
    #[error("Request timeout must be greater than zero.")]
    ZeroTimeout,

    /// A timeout value read from the environment could not be parsed.
    #[error("Invalid timeout '{value}'. Expected a whole number of seconds.")]
    InvalidTimeout {
        /// The raw value that failed to parse.
        value: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_url_error_message() {
        let message = ConfigError::EmptyBaseUrl.to_string();
        assert!(message.contains("Base URL cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "api.example.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("api.example.com"));
        assert!(message.contains("with scheme"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let message = error.to_string();
        assert!(message.contains("base_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::ZeroTimeout;
        let _: &dyn std::error::Error = &error;
    }
}
