//! Request and response bodies for the JSON API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThreadRequest {
    pub initial_content: String,
    /// Defaults to `"javascript"` when omitted.
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    pub content: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LockResponse {
    pub success: bool,
    pub locked: bool,
}
