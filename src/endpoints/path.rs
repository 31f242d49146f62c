//! Path templates for admin API endpoints.
//!
//! Templates use `{name}` placeholders for identifier interpolation:
//! - `/api/admin/gifts` - no identifiers
//! - `/api/admin/gifts/{id}` - a single identifier
//!
//! # Example
//!
//! ```rust
//! use lottery_admin::endpoints::build_path;
//! use std::collections::HashMap;
//!
//! let mut ids = HashMap::new();
//! ids.insert("id", "42");
//!
//! let url = build_path("/api/admin/paper/images/{id}", &ids);
//! assert_eq!(url, "/api/admin/paper/images/42");
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use crate::clients::HttpMethod;
use crate::endpoints::Endpoint;

/// The path configuration of one endpoint.
///
/// ```rust
/// use lottery_admin::endpoints::{Endpoint, EndpointPath};
/// use lottery_admin::HttpMethod;
///
/// const GIFT_BY_ID: EndpointPath = EndpointPath::new(
///     Endpoint::GetGift,
///     HttpMethod::Get,
///     &["id"],
///     "/api/admin/gifts/{id}",
/// );
/// assert_eq!(GIFT_BY_ID.id_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointPath {
    /// The operation this path serves.
    pub endpoint: Endpoint,
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// Identifier parameters in template order.
    pub ids: &'static [&'static str],
    /// The absolute path template with `{id}` placeholders.
    pub template: &'static str,
}

impl EndpointPath {
    /// Creates a new `EndpointPath`.
    #[must_use]
    pub const fn new(
        endpoint: Endpoint,
        http_method: HttpMethod,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            endpoint,
            http_method,
            ids,
            template,
        }
    }

    /// Returns the number of identifiers the template takes.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Returns the first declared identifier missing from `available_ids`.
    #[must_use]
    pub fn missing_id(&self, available_ids: &[&str]) -> Option<&'static str> {
        self.ids
            .iter()
            .find(|id| !available_ids.contains(id))
            .copied()
    }

    /// Interpolates identifiers into the template.
    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub fn build<V: Display>(&self, ids: &HashMap<&str, V>) -> String {
        build_path(self.template, ids)
    }
}

/// Builds a path from a template by interpolating identifiers.
///
/// Placeholders that aren't in the map remain unchanged.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

/// Returns the placeholder names in a template, in order of appearance.
///
/// An unterminated `{` ends the scan.
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        names.push(&after[..close]);
        rest = &after[close + 1..];
    }

    names
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EndpointPath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_path_stores_fields_correctly() {
        let path = EndpointPath::new(
            Endpoint::UpdateSlider,
            HttpMethod::Put,
            &["id"],
            "/api/admin/sliders/{id}",
        );

        assert_eq!(path.endpoint, Endpoint::UpdateSlider);
        assert_eq!(path.http_method, HttpMethod::Put);
        assert_eq!(path.ids, &["id"]);
        assert_eq!(path.template, "/api/admin/sliders/{id}");
    }

    #[test]
    fn test_build_path_single_id() {
        let mut ids = HashMap::new();
        ids.insert("id", "123");

        assert_eq!(build_path("/api/admin/gifts/{id}", &ids), "/api/admin/gifts/123");
    }

    #[test]
    fn test_build_path_handles_numeric_ids() {
        let mut ids: HashMap<&str, u64> = HashMap::new();
        ids.insert("id", 7);

        assert_eq!(
            build_path("/api/admin/paper/types/{id}", &ids),
            "/api/admin/paper/types/7"
        );
    }

    #[test]
    fn test_build_path_leaves_missing_ids() {
        let ids: HashMap<&str, &str> = HashMap::new();
        assert_eq!(build_path("/api/admin/gifts/{id}", &ids), "/api/admin/gifts/{id}");
    }

    #[test]
    fn test_build_path_does_not_escape_values() {
        let mut ids = HashMap::new();
        ids.insert("filename", "a b.png");

        assert_eq!(
            build_path("/api/admin/delete-image/{filename}", &ids),
            "/api/admin/delete-image/a b.png"
        );
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(placeholders("/api/admin/gifts"), Vec::<&str>::new());
        assert_eq!(placeholders("/api/admin/gifts/{id}"), vec!["id"]);
        assert_eq!(placeholders("/a/{type_id}/b/{id}"), vec!["type_id", "id"]);
        assert_eq!(placeholders("/a/{unterminated"), Vec::<&str>::new());
    }

    #[test]
    fn test_missing_id() {
        let path = EndpointPath::new(
            Endpoint::DeleteImage,
            HttpMethod::Delete,
            &["filename"],
            "/api/admin/delete-image/{filename}",
        );

        assert_eq!(path.missing_id(&["filename"]), None);
        assert_eq!(path.missing_id(&[]), Some("filename"));
    }
}
