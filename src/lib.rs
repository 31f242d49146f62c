//! # Lottery Admin Client
//!
//! An async Rust client for the lottery admin content API: gifts, banner
//! sliders, the 3D lottery feed, paper/guide catalogs and uploaded images.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AdminConfig`] and [`AdminConfigBuilder`]
//! - A typed [`Endpoint`] registry mapping each operation to one HTTP method
//!   and path template
//! - Async HTTP plumbing via [`HttpClient`], with JSON and multipart bodies
//! - [`ResourceClient`], one method per (resource, operation) pair, with a
//!   shared `loading`/`error` state observable by any clone
//! - [`image_url`] for turning stored file names into public URLs
//!
//! ## Quick Start
//!
//! ```rust
//! use lottery_admin::{AdminConfig, BaseUrl};
//! use std::time::Duration;
//!
//! let config = AdminConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/").unwrap())
//!     .timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.example.com");
//! assert_eq!(
//!     config.image_url("banner.png"),
//!     "https://api.example.com/uploads/banner.png"
//! );
//! ```
//!
//! ## Calling the API
//!
//! ```rust,ignore
//! use lottery_admin::{ImageUpload, ResourceClient};
//! use serde_json::json;
//!
//! // Reads LOTTERY_ADMIN_BASE_URL and LOTTERY_ADMIN_TIMEOUT_SECS
//! let client = ResourceClient::from_env()?;
//!
//! let gifts = client.get_gifts().await?;
//! client.update_slider(3, json!({"title": "Spring draw"})).await?;
//! client.delete_three_d("2024-05-01").await?;
//!
//! let stored = client
//!     .upload_image(ImageUpload::new("banner.png", png_bytes))
//!     .await?;
//!
//! // Failures are also recorded for observers until cleared
//! if let Some(message) = client.error() {
//!     eprintln!("last failure: {message}");
//!     client.clear_error();
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: The base URL and endpoint table are checked on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Opaque records**: Response bodies are returned as [`serde_json::Value`] unmodified

pub mod clients;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod resources;
pub mod store;

// Re-export public types at crate root for convenience
pub use config::{image_url, AdminConfig, AdminConfigBuilder, BaseUrl};
pub use endpoints::Endpoint;
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, ImageUpload, InvalidHttpRequestError,
};

// Re-export the resource client
pub use store::{ClientError, LoadingGuard, ResourceClient, StoreSnapshot, StoreState};
