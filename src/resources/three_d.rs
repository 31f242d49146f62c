//! 3D lottery result operations.
//!
//! Entries are keyed by their draw date rather than a surrogate id. Unlike
//! every other collection, updates and deletes do not put the key in the
//! path: the date travels in the JSON body, including on DELETE.
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! client.create_three_d(json!({"date": "2024-05-01", "result": "371"})).await?;
//! client.delete_three_d("2024-05-01").await?; // DELETE /api/admin/threed {"date": "2024-05-01"}
//! ```

use serde_json::{json, Value};

use crate::clients::HttpError;
use crate::endpoints::Endpoint;
use crate::ResourceClient;

impl ResourceClient {
    /// Fetches the 3D lottery feed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_three_d(&self) -> Result<Value, HttpError> {
        self.send(Endpoint::ListThreeD).await
    }

    /// Creates a 3D lottery entry.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_three_d(&self, entry: Value) -> Result<Value, HttpError> {
        self.send_json(Endpoint::CreateThreeD, None, entry).await
    }

    /// Updates the 3D lottery entry identified by the date inside `entry`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_three_d(&self, entry: Value) -> Result<Value, HttpError> {
        self.send_json(Endpoint::UpdateThreeD, None, entry).await
    }

    /// Deletes the 3D lottery entry for `date`.
    ///
    /// The date is sent as `{"date": ...}` in the DELETE request body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_three_d(&self, date: &str) -> Result<Value, HttpError> {
        self.send_json(Endpoint::DeleteThreeD, None, json!({ "date": date }))
            .await
    }
}
