//! Banner slider operations.

use std::fmt::Display;

use serde_json::Value;

use crate::clients::HttpError;
use crate::endpoints::Endpoint;
use crate::ResourceClient;

impl ResourceClient {
    /// Lists all sliders.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_sliders(&self) -> Result<Value, HttpError> {
        self.send(Endpoint::ListSliders).await
    }

    /// Fetches one slider by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_slider(&self, id: impl Display + Sync) -> Result<Value, HttpError> {
        self.send_to(Endpoint::GetSlider, "id", &id).await
    }

    /// Creates a slider.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_slider(&self, slider: Value) -> Result<Value, HttpError> {
        self.send_json(Endpoint::CreateSlider, None, slider).await
    }

    /// Replaces a slider.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_slider(
        &self,
        id: impl Display + Sync,
        slider: Value,
    ) -> Result<Value, HttpError> {
        self.send_json(Endpoint::UpdateSlider, Some(("id", &id)), slider)
            .await
    }

    /// Deletes a slider.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_slider(&self, id: impl Display + Sync) -> Result<Value, HttpError> {
        self.send_to(Endpoint::DeleteSlider, "id", &id).await
    }
}
