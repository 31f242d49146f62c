//! HTTP response types.

/// A response from the admin API.
///
/// # Example
///
/// ```rust
/// use lottery_admin::clients::HttpResponse;
/// use serde_json::json;
///
/// let response = HttpResponse::new(200, json!([{"id": 1}]));
/// assert!(response.is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The decoded response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, body: serde_json::Value) -> Self {
        Self { code, body }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Consumes the response, returning the body.
    #[must_use]
    pub fn into_body(self) -> serde_json::Value {
        self.body
    }

    /// Decodes a raw response body.
    ///
    /// Empty bodies decode to `null`, JSON bodies to their value, and any
    /// other text is returned as a JSON string.
    #[must_use]
    pub fn decode_body(text: &str) -> serde_json::Value {
        if text.trim().is_empty() {
            return serde_json::Value::Null;
        }
        serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, json!({}));
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 404, 422, 500, 502] {
            let response = HttpResponse::new(code, json!({}));
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_decode_body_variants() {
        assert_eq!(HttpResponse::decode_body(""), json!(null));
        assert_eq!(HttpResponse::decode_body("  \n"), json!(null));
        assert_eq!(
            HttpResponse::decode_body(r#"{"version":"1.2.0"}"#),
            json!({"version": "1.2.0"})
        );
        assert_eq!(HttpResponse::decode_body("deleted"), json!("deleted"));
    }
}
