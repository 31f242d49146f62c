//! Backend version probe.

use serde_json::Value;

use crate::endpoints::Endpoint;
use crate::ResourceClient;

impl ResourceClient {
    /// Fetches the backend version.
    ///
    /// Failures are logged and swallowed: this returns `None` and leaves the
    /// shared `loading`/`error` state untouched.
    pub async fn fetch_version(&self) -> Option<Value> {
        match self.send_untracked(Endpoint::Version).await {
            Ok(version) => Some(version),
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch backend version");
                None
            }
        }
    }
}
