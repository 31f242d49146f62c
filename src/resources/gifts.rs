//! Gift reward operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let gifts = client.get_gifts().await?;
//! let gift = client.create_gift(json!({"name": "Lucky Bag", "points": 100})).await?;
//! client.update_gift(7, json!({"points": 150})).await?;
//! client.delete_gift(7).await?;
//! ```

use std::fmt::Display;

use serde_json::Value;

use crate::clients::HttpError;
use crate::endpoints::Endpoint;
use crate::ResourceClient;

impl ResourceClient {
    /// Lists all gifts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails; the message is also
    /// recorded in the shared state.
    pub async fn get_gifts(&self) -> Result<Value, HttpError> {
        self.send(Endpoint::ListGifts).await
    }

    /// Fetches one gift by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_gift(&self, id: impl Display + Sync) -> Result<Value, HttpError> {
        self.send_to(Endpoint::GetGift, "id", &id).await
    }

    /// Creates a gift.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_gift(&self, gift: Value) -> Result<Value, HttpError> {
        self.send_json(Endpoint::CreateGift, None, gift).await
    }

    /// Replaces a gift.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_gift(
        &self,
        id: impl Display + Sync,
        gift: Value,
    ) -> Result<Value, HttpError> {
        self.send_json(Endpoint::UpdateGift, Some(("id", &id)), gift)
            .await
    }

    /// Deletes a gift.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_gift(&self, id: impl Display + Sync) -> Result<Value, HttpError> {
        self.send_to(Endpoint::DeleteGift, "id", &id).await
    }
}
