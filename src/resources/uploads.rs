//! Image upload and removal.
//!
//! Uploads are sent as `multipart/form-data` with the file in a single part
//! named `image`. The server replies with the stored file name (or URL),
//! which can be turned into a public URL with
//! [`ResourceClient::image_url`](crate::ResourceClient::image_url).

use std::path::Path;

use serde_json::Value;

use crate::clients::{HttpError, ImageUpload};
use crate::endpoints::Endpoint;
use crate::ResourceClient;

impl ResourceClient {
    /// Uploads an image.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use lottery_admin::ImageUpload;
    ///
    /// let upload = ImageUpload::new("banner.png", png_bytes);
    /// let stored = client.upload_image(upload).await?;
    /// ```
    pub async fn upload_image(&self, upload: ImageUpload) -> Result<Value, HttpError> {
        self.send_upload(Endpoint::UploadImage, upload).await
    }

    /// Reads a file from disk and uploads it.
    ///
    /// A read failure is recorded in the shared state like any request
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Upload`] if the file cannot be read, otherwise
    /// as [`ResourceClient::upload_image`].
    pub async fn upload_image_file(&self, path: impl AsRef<Path>) -> Result<Value, HttpError> {
        let _guard = self.store().begin();
        match ImageUpload::from_path(path).await {
            Ok(upload) => self.upload_image(upload).await,
            Err(err) => {
                let err = HttpError::Upload(err);
                tracing::warn!(error = %err, "could not read image for upload");
                self.store().record_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Deletes a previously uploaded image by file name.
    ///
    /// The name is placed in the path verbatim. A name containing `#`, `?`
    /// or `/` therefore targets a different path: `"a#b.png"` sends
    /// `DELETE /api/admin/delete-image/a`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_image(&self, filename: &str) -> Result<Value, HttpError> {
        self.send_to(Endpoint::DeleteImage, "filename", &filename)
            .await
    }
}
