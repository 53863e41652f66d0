//! REST helpers for the classification service boundary.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native (tests): inert stubs, since these endpoints only exist in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics; every failure is
//! converted by the calling component into a fixed user-facing rendering.
//! Non-2xx classification responses still carry a renderable JSON body
//! (the service answers validation errors with `categoria: "Erro"`), so
//! only transport and parse failures map to `Err`.

#![allow(clippy::unused_async)]

use super::types::{ClassifyResponse, HistoryEntry};

/// Submit pasted text for classification: JSON `{"email_content": ...}`
/// against `POST /api/processar`.
pub async fn classify_text(content: &str) -> Result<ClassifyResponse, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email_content": content });
        let resp = gloo_net::http::Request::post("/api/processar")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<ClassifyResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = content;
        Err("not available outside the browser".to_owned())
    }
}

/// Submit the staged file for classification: multipart body with the file
/// under the fixed `file` field, against `POST /api/processar`.
#[cfg(feature = "csr")]
pub async fn classify_file(file: &web_sys::File) -> Result<ClassifyResponse, String> {
    let form = web_sys::FormData::new().map_err(|_| "failed to build form data".to_owned())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "failed to attach file".to_owned())?;

    let resp = gloo_net::http::Request::post("/api/processar")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json::<ClassifyResponse>()
        .await
        .map_err(|e| e.to_string())
}

/// Fetch the full history collection from `GET /api/historico`.
pub async fn fetch_history() -> Result<Vec<HistoryEntry>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/historico")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<Vec<HistoryEntry>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}
