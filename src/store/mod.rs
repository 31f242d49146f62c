//! The resource client façade.
//!
//! [`ResourceClient`] exposes one async method per (resource, operation)
//! pair of the admin API. Each method:
//!
//! 1. holds a [`LoadingGuard`] for the duration of the call,
//! 2. sends exactly one request built from the [`Endpoint`] registry,
//! 3. returns the decoded response body unmodified, or
//! 4. records the failure message in the shared [`StoreState`] and returns
//!    the same error.
//!
//! The recorded `error` is never cleared by a later success; call
//! [`ResourceClient::clear_error`] to reset it.
//!
//! The per-resource methods live in [`crate::resources`].

mod state;

pub use state::{LoadingGuard, StoreSnapshot, StoreState};

use serde_json::Value;
use thiserror::Error;

use crate::clients::{HttpClient, HttpError, HttpRequest, ImageUpload};
use crate::config::AdminConfig;
use crate::endpoints::{validate_registry, Endpoint, RegistryError};
use crate::error::ConfigError;

/// Errors returned while constructing a [`ResourceClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The endpoint table failed validation.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The HTTP client could not be created.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Async client for the lottery admin API.
///
/// Cloning is cheap: clones share the connection pool and the
/// `loading`/`error` state.
///
/// # Example
///
/// ```rust,ignore
/// use lottery_admin::{AdminConfig, BaseUrl, ResourceClient};
/// use serde_json::json;
///
/// let config = AdminConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com")?)
///     .build()?;
/// let client = ResourceClient::new(&config)?;
///
/// let gifts = client.get_gifts().await?;
/// let created = client.create_gift(json!({"name": "Lucky Bag"})).await?;
///
/// if let Some(message) = client.error() {
///     eprintln!("last failure: {message}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http_client: HttpClient,
    config: AdminConfig,
    state: StoreState,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient>();
};

impl ResourceClient {
    /// Creates a client for the configured backend.
    ///
    /// Validates the endpoint registry on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Registry`] if the endpoint table is invalid and
    /// [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AdminConfig) -> Result<Self, ClientError> {
        validate_registry()?;
        let http_client = HttpClient::new(config)?;
        Ok(Self::from_parts(config, http_client))
    }

    /// Creates a client from the `LOTTERY_ADMIN_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for a missing or malformed variable,
    /// otherwise as [`ResourceClient::new`].
    pub fn from_env() -> Result<Self, ClientError> {
        let config = AdminConfig::from_env()?;
        Self::new(&config)
    }

    /// Creates a client around an injected [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Registry`] if the endpoint table is invalid.
    pub fn with_http_client(
        config: &AdminConfig,
        http_client: HttpClient,
    ) -> Result<Self, ClientError> {
        validate_registry()?;
        Ok(Self::from_parts(config, http_client))
    }

    fn from_parts(config: &AdminConfig, http_client: HttpClient) -> Self {
        Self {
            http_client,
            config: config.clone(),
            state: StoreState::new(),
        }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Returns the shared state handle.
    #[must_use]
    pub const fn store(&self) -> &StoreState {
        &self.state
    }

    /// Returns a copy of the current `loading`/`error` state.
    #[must_use]
    pub fn state(&self) -> StoreSnapshot {
        self.state.snapshot()
    }

    /// Returns `true` while any call on this client (or a clone) is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    /// Returns the message of the most recent failed call.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.error()
    }

    /// Clears the recorded failure message.
    pub fn clear_error(&self) {
        self.state.clear_error();
    }

    /// Builds the public URL of an uploaded image.
    ///
    /// See [`AdminConfig::image_url`].
    #[must_use]
    pub fn image_url(&self, filename: &str) -> String {
        self.config.image_url(filename)
    }

    /// Sends a body-less request to an endpoint that takes no identifier.
    pub(crate) async fn send(&self, endpoint: Endpoint) -> Result<Value, HttpError> {
        self.tracked(async {
            let request = HttpRequest::builder(endpoint.http_method(), endpoint.path()?).build()?;
            self.dispatch(request).await
        })
        .await
    }

    /// Sends a body-less request to an endpoint keyed by one identifier.
    pub(crate) async fn send_to(
        &self,
        endpoint: Endpoint,
        name: &str,
        value: &(dyn std::fmt::Display + Sync),
    ) -> Result<Value, HttpError> {
        self.tracked(async {
            let path = endpoint.path_with(name, value)?;
            let request = HttpRequest::builder(endpoint.http_method(), path).build()?;
            self.dispatch(request).await
        })
        .await
    }

    /// Sends a JSON body to an endpoint, optionally keyed by one identifier.
    pub(crate) async fn send_json(
        &self,
        endpoint: Endpoint,
        id: Option<(&str, &(dyn std::fmt::Display + Sync))>,
        body: Value,
    ) -> Result<Value, HttpError> {
        self.tracked(async {
            let path = match id {
                Some((name, value)) => endpoint.path_with(name, value)?,
                None => endpoint.path()?,
            };
            let request = HttpRequest::builder(endpoint.http_method(), path)
                .json(body)
                .build()?;
            self.dispatch(request).await
        })
        .await
    }

    /// Sends a multipart upload to an endpoint.
    pub(crate) async fn send_upload(
        &self,
        endpoint: Endpoint,
        upload: ImageUpload,
    ) -> Result<Value, HttpError> {
        self.tracked(async {
            let request = HttpRequest::builder(endpoint.http_method(), endpoint.path()?)
                .multipart(upload)
                .build()?;
            self.dispatch(request).await
        })
        .await
    }

    /// Sends a request without touching the shared state.
    pub(crate) async fn send_untracked(&self, endpoint: Endpoint) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(endpoint.http_method(), endpoint.path()?).build()?;
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<Value, HttpError> {
        let response = self.http_client.request(request).await?;
        Ok(response.into_body())
    }

    /// Runs one call under a loading guard, recording its failure message.
    async fn tracked<F>(&self, call: F) -> Result<Value, HttpError>
    where
        F: std::future::Future<Output = Result<Value, HttpError>>,
    {
        let _guard = self.state.begin();
        let result = call.await;
        if let Err(err) = &result {
            self.state.record_error(err.to_string());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;

    fn test_config() -> AdminConfig {
        AdminConfig::builder()
            .base_url(BaseUrl::new("http://127.0.0.1:9").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_client_is_idle() {
        let client = ResourceClient::new(&test_config()).unwrap();
        assert!(!client.loading());
        assert!(client.error().is_none());
        assert_eq!(client.state(), StoreSnapshot::default());
    }

    #[test]
    fn test_clones_share_state() {
        let client = ResourceClient::new(&test_config()).unwrap();
        let clone = client.clone();

        clone.store().record_error("boom");
        assert_eq!(client.error().as_deref(), Some("boom"));

        client.clear_error();
        assert!(clone.error().is_none());
    }

    #[test]
    fn test_image_url_uses_config_base() {
        let client = ResourceClient::new(&test_config()).unwrap();
        assert_eq!(
            client.image_url("a.png"),
            "http://127.0.0.1:9/uploads/a.png"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_records_error_and_releases_loading() {
        let client = ResourceClient::new(&test_config()).unwrap();

        let result = client.get_gifts().await;

        assert!(matches!(result, Err(HttpError::Network(_))));
        assert!(!client.loading());
        let message = client.error().unwrap();
        assert!(message.starts_with("Network error"));
    }

    #[test]
    fn test_client_error_wraps_config_error() {
        let error = ClientError::from(ConfigError::EmptyBaseUrl);
        assert!(error.to_string().contains("Base URL cannot be empty"));
    }
}
