//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: the unified "request failed" error returned by every
//!   [`ResourceClient`](crate::ResourceClient) operation
//!
//! # Example
//!
//! ```rust,ignore
//! use lottery_admin::HttpError;
//!
//! match client.get_gifts().await {
//!     Ok(gifts) => println!("Gifts: {gifts}"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// `message` is always `Request failed with status code {code}`; the
/// server's own explanation, if any, is available via
/// [`server_message`](Self::server_message).
///
/// # Example
///
/// ```rust
/// use lottery_admin::clients::HttpResponseError;
///
/// let error = HttpResponseError::from_response(
///     404,
///     serde_json::json!({"error": "Gift not found"}),
/// );
///
/// assert_eq!(error.to_string(), "Request failed with status code 404");
/// assert_eq!(error.server_message(), Some("Gift not found"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable failure message.
    pub message: String,
    /// The decoded response body.
    pub body: serde_json::Value,
}

impl HttpResponseError {
    /// Builds the error for a failed response.
    #[must_use]
    pub fn from_response(code: u16, body: serde_json::Value) -> Self {
        Self {
            code,
            message: format!("Request failed with status code {code}"),
            body,
        }
    }

    /// Returns the server's `error` or `message` field, if the body has a
    /// non-empty one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        ["error", "message"]
            .iter()
            .find_map(|key| self.body.get(key).and_then(serde_json::Value::as_str))
            .filter(|m| !m.is_empty())
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A multipart body was attached to a method other than POST.
    #[error("Multipart uploads are only supported with post, not {method}.")]
    MultipartMethod {
        /// The offending HTTP method.
        method: String,
    },
}

/// Unified error type for all request failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, connection or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The file to upload could not be read.
    #[error("Failed to read upload: {0}")]
    Upload(#[from] std::io::Error),

    /// An endpoint template was left with an unresolved placeholder.
    #[error("Endpoint {endpoint} is missing path parameter '{param}'")]
    InvalidEndpoint {
        /// The endpoint name.
        endpoint: &'static str,
        /// The unresolved parameter.
        param: &'static str,
    },
}

impl HttpError {
    /// Returns the HTTP status code when the failure was a server response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_error_message_is_status_only() {
        let error = HttpResponseError::from_response(400, json!({"error": "title is required"}));
        assert_eq!(error.to_string(), "Request failed with status code 400");
        assert_eq!(error.code, 400);

        let error = HttpResponseError::from_response(500, json!({}));
        assert_eq!(error.to_string(), "Request failed with status code 500");
    }

    #[test]
    fn test_server_message_reads_error_then_message_field() {
        let error = HttpResponseError::from_response(400, json!({"error": "title is required"}));
        assert_eq!(error.server_message(), Some("title is required"));

        let error = HttpResponseError::from_response(409, json!({"message": "duplicate date"}));
        assert_eq!(error.server_message(), Some("duplicate date"));

        let error = HttpResponseError::from_response(404, json!({"error": ""}));
        assert_eq!(error.server_message(), None);

        let error = HttpResponseError::from_response(502, json!("Bad Gateway"));
        assert_eq!(error.server_message(), None);
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");

        let error = InvalidHttpRequestError::MultipartMethod {
            method: "put".to_string(),
        };
        assert!(error.to_string().contains("put"));
    }

    #[test]
    fn test_http_error_status() {
        let error = HttpError::Response(HttpResponseError::from_response(503, json!({})));
        assert_eq!(error.status(), Some(503));

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType);
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_invalid_endpoint_message() {
        let error = HttpError::InvalidEndpoint {
            endpoint: "GiftById",
            param: "id",
        };
        assert_eq!(
            error.to_string(),
            "Endpoint GiftById is missing path parameter 'id'"
        );
    }
}
