//! Typed endpoint registry for the admin API.
//!
//! Every operation the client performs is an [`Endpoint`] variant. The static
//! [`REGISTRY`] binds each variant to exactly one [`EndpointPath`]: its HTTP
//! method, identifier names and path template. The registry is checked once by
//! [`validate_registry`] before the first client is built.
//!
//! # Example
//!
//! ```rust
//! use lottery_admin::endpoints::Endpoint;
//! use lottery_admin::HttpMethod;
//!
//! let path = Endpoint::UpdateGift.path_with("id", 17).unwrap();
//! assert_eq!(path, "/api/admin/gifts/17");
//! assert_eq!(Endpoint::UpdateGift.http_method(), HttpMethod::Put);
//! ```

mod path;
mod registry;

pub use path::{build_path, placeholders, EndpointPath};
pub use registry::{validate_registry, RegistryError};

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::clients::{HttpError, HttpMethod};

/// One (resource, operation) pair of the admin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// GET the backend version.
    Version,

    /// GET all gifts.
    ListGifts,
    /// GET one gift.
    GetGift,
    /// POST a new gift.
    CreateGift,
    /// PUT an existing gift.
    UpdateGift,
    /// DELETE a gift.
    DeleteGift,

    /// GET all sliders.
    ListSliders,
    /// GET one slider.
    GetSlider,
    /// POST a new slider.
    CreateSlider,
    /// PUT an existing slider.
    UpdateSlider,
    /// DELETE a slider.
    DeleteSlider,

    /// GET the 3D lottery feed.
    ListThreeD,
    /// POST a 3D lottery entry.
    CreateThreeD,
    /// PUT a 3D lottery entry, keyed by the date in the body.
    UpdateThreeD,
    /// DELETE a 3D lottery entry, keyed by the date in the body.
    DeleteThreeD,

    /// GET all paper types.
    ListPaperTypes,
    /// POST a new paper type.
    CreatePaperType,
    /// PUT an existing paper type.
    UpdatePaperType,
    /// DELETE a paper type.
    DeletePaperType,

    /// POST a new paper image.
    CreatePaperImage,
    /// POST several paper images at once.
    BatchCreatePaperImages,
    /// PUT an existing paper image.
    UpdatePaperImage,
    /// DELETE a paper image.
    DeletePaperImage,

    /// POST a multipart image upload.
    UploadImage,
    /// DELETE an uploaded image by file name.
    DeleteImage,

    /// GET the current public game state.
    CurrentGame,
    /// GET the public game history.
    GameHistory,
    /// GET the public rewards list.
    Rewards,
    /// GET the public banners list.
    Banners,
    /// GET the public guide types.
    GuideTypes,
}

impl Endpoint {
    /// Every endpoint, in registry order.
    pub const ALL: &'static [Self] = &[
        Self::Version,
        Self::ListGifts,
        Self::GetGift,
        Self::CreateGift,
        Self::UpdateGift,
        Self::DeleteGift,
        Self::ListSliders,
        Self::GetSlider,
        Self::CreateSlider,
        Self::UpdateSlider,
        Self::DeleteSlider,
        Self::ListThreeD,
        Self::CreateThreeD,
        Self::UpdateThreeD,
        Self::DeleteThreeD,
        Self::ListPaperTypes,
        Self::CreatePaperType,
        Self::UpdatePaperType,
        Self::DeletePaperType,
        Self::CreatePaperImage,
        Self::BatchCreatePaperImages,
        Self::UpdatePaperImage,
        Self::DeletePaperImage,
        Self::UploadImage,
        Self::DeleteImage,
        Self::CurrentGame,
        Self::GameHistory,
        Self::Rewards,
        Self::Banners,
        Self::GuideTypes,
    ];

    /// Returns the endpoint name used in logs and errors.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Version => "Version",
            Self::ListGifts => "ListGifts",
            Self::GetGift => "GetGift",
            Self::CreateGift => "CreateGift",
            Self::UpdateGift => "UpdateGift",
            Self::DeleteGift => "DeleteGift",
            Self::ListSliders => "ListSliders",
            Self::GetSlider => "GetSlider",
            Self::CreateSlider => "CreateSlider",
            Self::UpdateSlider => "UpdateSlider",
            Self::DeleteSlider => "DeleteSlider",
            Self::ListThreeD => "ListThreeD",
            Self::CreateThreeD => "CreateThreeD",
            Self::UpdateThreeD => "UpdateThreeD",
            Self::DeleteThreeD => "DeleteThreeD",
            Self::ListPaperTypes => "ListPaperTypes",
            Self::CreatePaperType => "CreatePaperType",
            Self::UpdatePaperType => "UpdatePaperType",
            Self::DeletePaperType => "DeletePaperType",
            Self::CreatePaperImage => "CreatePaperImage",
            Self::BatchCreatePaperImages => "BatchCreatePaperImages",
            Self::UpdatePaperImage => "UpdatePaperImage",
            Self::DeletePaperImage => "DeletePaperImage",
            Self::UploadImage => "UploadImage",
            Self::DeleteImage => "DeleteImage",
            Self::CurrentGame => "CurrentGame",
            Self::GameHistory => "GameHistory",
            Self::Rewards => "Rewards",
            Self::Banners => "Banners",
            Self::GuideTypes => "GuideTypes",
        }
    }

    /// Returns this endpoint's registry entry.
    ///
    /// [`REGISTRY`] is laid out in declaration order, so the entry sits at
    /// the variant's discriminant. [`validate_registry`] checks that layout.
    #[must_use]
    pub fn entry(&self) -> &'static EndpointPath {
        &REGISTRY[*self as usize]
    }

    /// Returns the HTTP method bound to this endpoint.
    #[must_use]
    pub fn http_method(&self) -> HttpMethod {
        self.entry().http_method
    }

    /// Resolves the concrete path for this endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidEndpoint`] if a declared identifier is
    /// missing from `ids`.
    #[allow(clippy::implicit_hasher)]
    pub fn resolve<V: Display>(&self, ids: &HashMap<&str, V>) -> Result<String, HttpError> {
        let entry = self.entry();
        let available: Vec<&str> = ids.keys().copied().collect();

        if let Some(param) = entry.missing_id(&available) {
            return Err(HttpError::InvalidEndpoint {
                endpoint: self.as_str(),
                param,
            });
        }

        Ok(entry.build(ids))
    }

    /// Resolves a path that takes no identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidEndpoint`] if the endpoint needs one.
    pub fn path(&self) -> Result<String, HttpError> {
        self.resolve::<&str>(&HashMap::new())
    }

    /// Resolves a path that takes a single identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidEndpoint`] if the endpoint needs an
    /// identifier other than `name`.
    pub fn path_with(&self, name: &str, value: impl Display) -> Result<String, HttpError> {
        let mut ids = HashMap::new();
        ids.insert(name, value.to_string());
        self.resolve(&ids)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The endpoint table of the admin API.
pub const REGISTRY: &[EndpointPath] = &[
    EndpointPath::new(Endpoint::Version, HttpMethod::Get, &[], "/api/version"),
    // Gifts
    EndpointPath::new(Endpoint::ListGifts, HttpMethod::Get, &[], "/api/admin/gifts"),
    EndpointPath::new(Endpoint::GetGift, HttpMethod::Get, &["id"], "/api/admin/gifts/{id}"),
    EndpointPath::new(Endpoint::CreateGift, HttpMethod::Post, &[], "/api/admin/gifts"),
    EndpointPath::new(Endpoint::UpdateGift, HttpMethod::Put, &["id"], "/api/admin/gifts/{id}"),
    EndpointPath::new(Endpoint::DeleteGift, HttpMethod::Delete, &["id"], "/api/admin/gifts/{id}"),
    // Sliders
    EndpointPath::new(Endpoint::ListSliders, HttpMethod::Get, &[], "/api/admin/sliders"),
    EndpointPath::new(Endpoint::GetSlider, HttpMethod::Get, &["id"], "/api/admin/sliders/{id}"),
    EndpointPath::new(Endpoint::CreateSlider, HttpMethod::Post, &[], "/api/admin/sliders"),
    EndpointPath::new(Endpoint::UpdateSlider, HttpMethod::Put, &["id"], "/api/admin/sliders/{id}"),
    EndpointPath::new(Endpoint::DeleteSlider, HttpMethod::Delete, &["id"], "/api/admin/sliders/{id}"),
    // 3D lottery: the feed is read from the game API, writes go to the admin API
    EndpointPath::new(Endpoint::ListThreeD, HttpMethod::Get, &[], "/api/game/3d"),
    EndpointPath::new(Endpoint::CreateThreeD, HttpMethod::Post, &[], "/api/admin/threed"),
    EndpointPath::new(Endpoint::UpdateThreeD, HttpMethod::Put, &[], "/api/admin/threed"),
    EndpointPath::new(Endpoint::DeleteThreeD, HttpMethod::Delete, &[], "/api/admin/threed"),
    // Paper types
    EndpointPath::new(Endpoint::ListPaperTypes, HttpMethod::Get, &[], "/api/admin/paper/types"),
    EndpointPath::new(Endpoint::CreatePaperType, HttpMethod::Post, &[], "/api/admin/paper/types"),
    EndpointPath::new(Endpoint::UpdatePaperType, HttpMethod::Put, &["id"], "/api/admin/paper/types/{id}"),
    EndpointPath::new(Endpoint::DeletePaperType, HttpMethod::Delete, &["id"], "/api/admin/paper/types/{id}"),
    // Paper images
    EndpointPath::new(Endpoint::CreatePaperImage, HttpMethod::Post, &[], "/api/admin/paper/images"),
    EndpointPath::new(Endpoint::BatchCreatePaperImages, HttpMethod::Post, &[], "/api/admin/paper/images/batch"),
    EndpointPath::new(Endpoint::UpdatePaperImage, HttpMethod::Put, &["id"], "/api/admin/paper/images/{id}"),
    EndpointPath::new(Endpoint::DeletePaperImage, HttpMethod::Delete, &["id"], "/api/admin/paper/images/{id}"),
    // Uploads
    EndpointPath::new(Endpoint::UploadImage, HttpMethod::Post, &[], "/api/admin/upload-image"),
    EndpointPath::new(Endpoint::DeleteImage, HttpMethod::Delete, &["filename"], "/api/admin/delete-image/{filename}"),
    // Public game feeds
    EndpointPath::new(Endpoint::CurrentGame, HttpMethod::Get, &[], "/api/game/current"),
    EndpointPath::new(Endpoint::GameHistory, HttpMethod::Get, &[], "/api/game/history"),
    EndpointPath::new(Endpoint::Rewards, HttpMethod::Get, &[], "/api/game/rewards"),
    EndpointPath::new(Endpoint::Banners, HttpMethod::Get, &[], "/api/game/banners"),
    EndpointPath::new(Endpoint::GuideTypes, HttpMethod::Get, &[], "/api/game/guides/types"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_endpoint_has_a_registry_entry() {
        for endpoint in Endpoint::ALL {
            assert_eq!(endpoint.entry().endpoint, *endpoint);
        }
        assert_eq!(Endpoint::ALL.len(), REGISTRY.len());
    }

    #[test]
    fn test_path_with_interpolates_identifier() {
        assert_eq!(
            Endpoint::DeletePaperImage.path_with("id", 5).unwrap(),
            "/api/admin/paper/images/5"
        );
        assert_eq!(
            Endpoint::DeleteImage
                .path_with("filename", "banner.png")
                .unwrap(),
            "/api/admin/delete-image/banner.png"
        );
    }

    #[test]
    fn test_path_rejects_missing_identifier() {
        let result = Endpoint::GetGift.path();
        assert!(matches!(
            result,
            Err(HttpError::InvalidEndpoint { endpoint: "GetGift", param: "id" })
        ));

        let result = Endpoint::DeleteImage.path_with("id", 1);
        assert!(matches!(
            result,
            Err(HttpError::InvalidEndpoint { param: "filename", .. })
        ));
    }

    #[test]
    fn test_three_d_delete_has_no_path_identifier() {
        let entry = Endpoint::DeleteThreeD.entry();
        assert_eq!(entry.http_method, HttpMethod::Delete);
        assert_eq!(entry.id_count(), 0);
        assert_eq!(Endpoint::DeleteThreeD.path().unwrap(), "/api/admin/threed");
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Endpoint::BatchCreatePaperImages.to_string(), "BatchCreatePaperImages");
    }
}
