//! REST API helpers for the upload and chat endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! POST helpers return `Result<_, String>` where the `Err` text is already
//! user-displayable: the server's `{error}` message when present, otherwise
//! a generic fallback. The best-effort result fetch degrades to `None`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatResponse, UploadResult};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ChatRequest, ErrorBody};

#[cfg(any(test, feature = "hydrate"))]
const UPLOAD_ENDPOINT: &str = "/api/upload";
#[cfg(any(test, feature = "hydrate"))]
const CHAT_ENDPOINT: &str = "/api/chat";
#[cfg(any(test, feature = "hydrate"))]
const UPLOAD_ERROR_FALLBACK: &str = "Error uploading image";
#[cfg(any(test, feature = "hydrate"))]
const CHAT_ERROR_FALLBACK: &str = "Error getting chat response";

#[cfg(any(test, feature = "hydrate"))]
fn result_endpoint(result_id: &str) -> String {
    format!("/api/result/{result_id}")
}

/// Extract the server's `{error}` message from a failure body, or fall back.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .unwrap_or_else(|| fallback.to_owned())
}

/// Submit an image to `POST /api/upload` as multipart form data.
///
/// The browser fills in the multipart boundary from the `FormData` body.
///
/// # Errors
///
/// Returns a displayable message when the form cannot be built, the request
/// fails in transport, or the server answers non-2xx.
#[cfg(feature = "hydrate")]
pub async fn upload_image(file: &web_sys::File) -> Result<UploadResult, String> {
    let form =
        web_sys::FormData::new().map_err(|_| "could not build the upload form".to_owned())?;
    form.append_with_blob("file", file)
        .map_err(|_| "could not attach the selected file".to_owned())?;

    let resp = gloo_net::http::Request::post(UPLOAD_ENDPOINT)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(error_from_body(&body, UPLOAD_ERROR_FALLBACK));
    }
    resp.json::<UploadResult>().await.map_err(|e| e.to_string())
}

/// Send one chat turn to `POST /api/chat`.
///
/// `session_id` is `None` until the server has issued a token; `disease` is
/// the displayed disease context, empty when there is none.
///
/// # Errors
///
/// Returns a displayable message on transport failure or a non-2xx status.
pub async fn send_chat_message(
    message: &str,
    session_id: Option<&str>,
    disease: &str,
) -> Result<ChatResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = ChatRequest {
            message,
            session_id,
            disease,
        };
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(&body, CHAT_ERROR_FALLBACK));
        }
        resp.json::<ChatResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, session_id, disease);
        Err("not available on server".to_owned())
    }
}

/// Fetch a stored result from `GET /api/result/{id}` to restore the chat
/// page's disease context after a deep-link entry.
/// Returns `None` on any failure or on the server.
pub async fn fetch_result(result_id: &str) -> Option<UploadResult> {
    #[cfg(feature = "hydrate")]
    {
        let url = result_endpoint(result_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UploadResult>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = result_id;
        None
    }
}
