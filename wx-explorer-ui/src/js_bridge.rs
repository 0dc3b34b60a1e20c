//! Typed wrappers around the browser `fetch` API via `web-sys`.
//!
//! Response bodies are read as text and handed to
//! [`wx_core::models::decode_response`], so the browser and the native client
//! classify failures identically.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;
use wx_core::models::{decode_response, Envelope};
use wx_core::ApiError;

/// GET `url` and decode the JSON envelope.
///
/// Network errors surface as [`ApiError::Transport`] carrying the browser's
/// message (e.g. "Failed to fetch"). No timeout is applied.
pub async fn fetch_json<T: Envelope>(url: &str) -> Result<T, ApiError> {
    let window =
        web_sys::window().ok_or_else(|| ApiError::Transport("no window available".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = resp_value.dyn_into().map_err(js_error)?;
    let status = response.status();

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text.as_string().unwrap_or_default();

    decode_response(status, &body)
}

/// Turn a rejected promise value into a transport error.
fn js_error(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Transport(message)
}
