//! Wire DTOs for the upload and chat endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON contracts exactly; optional fields
//! default so older or sparser server responses still deserialize. Extra
//! server fields (e.g. `image_path`, `timestamp` on upload responses) are
//! ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A classification result returned by `POST /api/upload`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UploadResult {
    /// Disease identifier, underscore-separated words.
    pub prediction: String,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
    /// Opaque stored-result reference, used only for the chat deep link.
    pub id: String,
}

/// Request body for `POST /api/chat`.
///
/// `session_id` is serialized as `null` until the server has issued a token.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub session_id: Option<&'a str>,
    pub disease: &'a str,
}

/// Response body for `POST /api/chat`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatResponse {
    /// Bot reply in the constrained markdown subset.
    pub response: String,
    /// Conversation token to carry on subsequent requests, when issued.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Error envelope both endpoints return on failure. The message is optional;
/// callers fall back to a generic one.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
