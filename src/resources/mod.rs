//! Per-collection operations of the [`ResourceClient`](crate::ResourceClient).
//!
//! Each submodule adds an `impl ResourceClient` block for one collection:
//!
//! - [`gifts`]: gift rewards
//! - [`sliders`]: promotional banner sliders
//! - [`three_d`]: the 3D lottery result feed
//! - [`paper`]: paper/guide types and their images
//! - [`uploads`]: image upload and removal
//! - [`game`]: public, read-only game feeds
//! - [`version`]: the backend version probe
//!
//! Records are opaque JSON; every method returns the server's body as-is.

pub mod game;
pub mod gifts;
pub mod paper;
pub mod sliders;
pub mod three_d;
pub mod uploads;
pub mod version;
