//! HTTP client for admin API communication.
//!
//! This module provides the [`HttpClient`] type: one validated request in,
//! one decoded response (or error) out. There is no retry logic; every
//! request is bounded by the configured overall timeout.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{AdminConfig, BaseUrl};

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the admin API.
///
/// The client handles:
/// - URL construction from the configured [`BaseUrl`]
/// - Default headers (`User-Agent`, `Accept`)
/// - JSON and multipart body encoding
/// - Response decoding and non-2xx error mapping
///
/// `HttpClient` is `Send + Sync` and cheap to clone; clones share the
/// underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use lottery_admin::{AdminConfig, BaseUrl};
/// use lottery_admin::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = AdminConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/version").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g. TLS initialization failure).
    pub fn new(config: &AdminConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self::with_reqwest(config, client))
    }

    /// Creates an HTTP client around an existing reqwest client.
    ///
    /// The caller's client keeps its own timeout and TLS settings; only the
    /// base URL and user agent are taken from `config`.
    #[must_use]
    pub fn with_reqwest(config: &AdminConfig, client: reqwest::Client) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Lottery Admin Client v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request to the admin API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error or timeout occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let mut headers = self.default_headers.clone();
        // Multipart content type carries a boundary reqwest generates itself.
        if let Some(DataType::Json) = request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                DataType::Json.as_content_type().to_string(),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(upload) = request.upload {
            req_builder = req_builder.multipart(upload.into_form()?);
        } else if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!("{} {}", request.http_method, request.path);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let body_text = res.text().await?;
        let body = HttpResponse::decode_body(&body_text);

        let response = HttpResponse::new(code, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            "Request {} {} failed with status {}",
            request.http_method,
            request.path,
            code
        );

        Err(HttpError::Response(HttpResponseError::from_response(
            code,
            response.into_body(),
        )))
    }
}
