//! Public, read-only game feeds.
//!
//! These back the player-facing pages and need no admin privileges, but go
//! through the same shared `loading`/`error` state as the admin operations.

use serde_json::Value;

use crate::clients::HttpError;
use crate::endpoints::Endpoint;
use crate::ResourceClient;

impl ResourceClient {
    /// Fetches the current game state.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_current_game(&self) -> Result<Value, HttpError> {
        self.send(Endpoint::CurrentGame).await
    }

    /// Fetches past game results.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_game_history(&self) -> Result<Value, HttpError> {
        self.send(Endpoint::GameHistory).await
    }

    /// Fetches the public rewards list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_rewards(&self) -> Result<Value, HttpError> {
        self.send(Endpoint::Rewards).await
    }

    /// Fetches the public banners list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_banners(&self) -> Result<Value, HttpError> {
        self.send(Endpoint::Banners).await
    }

    /// Fetches the public guide types.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_guide_types(&self) -> Result<Value, HttpError> {
        self.send(Endpoint::GuideTypes).await
    }
}
