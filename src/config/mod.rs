//! Configuration types for the admin API client.
//!
//! # Overview
//!
//! - [`AdminConfig`]: base URL, request timeout and user agent settings
//! - [`AdminConfigBuilder`]: a builder for constructing [`AdminConfig`] instances
//! - [`BaseUrl`]: a validated base URL newtype
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use lottery_admin::{AdminConfig, BaseUrl};
//!
//! let config = AdminConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.image_url("foo.png"), "https://api.example.com/uploads/foo.png");
//! ```

mod newtypes;

pub use newtypes::BaseUrl;

use std::time::Duration;

use crate::error::ConfigError;

/// Default overall request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Path under the base URL where uploaded images are served.
pub const UPLOADS_PATH: &str = "/uploads";

/// Environment variable holding the admin API base URL.
pub const BASE_URL_ENV: &str = "LOTTERY_ADMIN_BASE_URL";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "LOTTERY_ADMIN_TIMEOUT_SECS";

/// Configuration for the admin API client.
///
/// `AdminConfig` is `Clone`, `Send` and `Sync`; build it once and pass it to
/// [`ResourceClient::new`](crate::ResourceClient::new).
#[derive(Clone, Debug)]
pub struct AdminConfig {
    base_url: BaseUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl AdminConfig {
    /// Creates a new builder for constructing an `AdminConfig`.
    #[must_use]
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::new()
    }

    /// Builds a configuration from `LOTTERY_ADMIN_BASE_URL` and the optional
    /// `LOTTERY_ADMIN_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the base URL variable
    /// is unset, or the validation error for a malformed value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_ENV).ok_or(ConfigError::MissingRequiredField {
            field: "base_url",
        })?;

        let mut builder = Self::builder().base_url(BaseUrl::new(base_url)?);

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw.clone() })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the overall request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Builds the public URL of an uploaded image.
    ///
    /// Empty names yield an empty string and names that already look like a
    /// full URL are passed through unchanged.
    ///
    /// ```rust
    /// use lottery_admin::{AdminConfig, BaseUrl};
    ///
    /// let config = AdminConfig::builder()
    ///     .base_url(BaseUrl::new("https://cdn.example.com").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.image_url(""), "");
    /// assert_eq!(config.image_url("http://x/y.png"), "http://x/y.png");
    /// assert_eq!(config.image_url("foo.png"), "https://cdn.example.com/uploads/foo.png");
    /// ```
    #[must_use]
    pub fn image_url(&self, filename: &str) -> String {
        image_url(&self.base_url, filename)
    }

    /// Joins an endpoint path onto the base URL.
    #[must_use]
    pub fn api_url(&self, endpoint: &str) -> String {
        self.base_url.join(endpoint)
    }
}

/// Builds the public URL of an uploaded image relative to `base`.
///
/// See [`AdminConfig::image_url`].
#[must_use]
pub fn image_url(base: &BaseUrl, filename: &str) -> String {
    if filename.is_empty() {
        return String::new();
    }
    if filename.starts_with("http") {
        return filename.to_string();
    }
    base.join(&format!("{UPLOADS_PATH}/{filename}"))
}

// Verify AdminConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminConfig>();
};

/// Builder for constructing [`AdminConfig`] instances.
///
/// `base_url` is required. `timeout` defaults to [`DEFAULT_TIMEOUT`].
#[derive(Debug, Default)]
pub struct AdminConfigBuilder {
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl AdminConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the overall request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AdminConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set
    /// and [`ConfigError::ZeroTimeout`] for a zero timeout.
    pub fn build(self) -> Result<AdminConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(AdminConfig {
            base_url,
            timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
