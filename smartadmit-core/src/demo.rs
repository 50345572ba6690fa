//! Payload of the landing page's demo endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoResponse {
    pub message: String,
}

impl DemoResponse {
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body is not `{ "message": string }`.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
