//! Paper/guide catalog operations.
//!
//! A paper type owns any number of paper images. Types are listed and
//! edited through `/api/admin/paper/types`; images are created singly or in
//! batches and edited through `/api/admin/paper/images`.
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let kind = client.create_paper_type(json!({"name": "Morning Guide"})).await?;
//! client
//!     .batch_create_paper_images(json!({
//!         "type_id": 3,
//!         "images": ["a.png", "b.png"],
//!     }))
//!     .await?;
//! ```

use std::fmt::Display;

use serde_json::Value;

use crate::clients::HttpError;
use crate::endpoints::Endpoint;
use crate::ResourceClient;

impl ResourceClient {
    /// Lists all paper types.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_paper_types(&self) -> Result<Value, HttpError> {
        self.send(Endpoint::ListPaperTypes).await
    }

    /// Creates a paper type.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_paper_type(&self, paper_type: Value) -> Result<Value, HttpError> {
        self.send_json(Endpoint::CreatePaperType, None, paper_type)
            .await
    }

    /// Replaces a paper type.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_paper_type(
        &self,
        id: impl Display + Sync,
        paper_type: Value,
    ) -> Result<Value, HttpError> {
        self.send_json(Endpoint::UpdatePaperType, Some(("id", &id)), paper_type)
            .await
    }

    /// Deletes a paper type.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_paper_type(&self, id: impl Display + Sync) -> Result<Value, HttpError> {
        self.send_to(Endpoint::DeletePaperType, "id", &id).await
    }

    /// Creates a single paper image.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_paper_image(&self, image: Value) -> Result<Value, HttpError> {
        self.send_json(Endpoint::CreatePaperImage, None, image).await
    }

    /// Creates several paper images in one request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn batch_create_paper_images(&self, batch: Value) -> Result<Value, HttpError> {
        self.send_json(Endpoint::BatchCreatePaperImages, None, batch)
            .await
    }

    /// Replaces a paper image.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_paper_image(
        &self,
        id: impl Display + Sync,
        image: Value,
    ) -> Result<Value, HttpError> {
        self.send_json(Endpoint::UpdatePaperImage, Some(("id", &id)), image)
            .await
    }

    /// Deletes a paper image.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_paper_image(&self, id: impl Display + Sync) -> Result<Value, HttpError> {
        self.send_to(Endpoint::DeletePaperImage, "id", &id).await
    }
}
