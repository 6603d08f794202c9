//! Page Location
//!
//! Reads and rewrites query parameters of the current page URL without
//! reloading, through `history.replaceState`.

use wasm_bindgen::JsValue;
use web_sys::Url;

use crate::error::{js_error, StoreError, StoreResult};

/// Schemes whose documents cannot rewrite their own URL
const OPAQUE_SCHEMES: &[&str] = &["blob:", "data:", "about:"];

fn current_url() -> StoreResult<Url> {
    let href = web_sys::window()
        .ok_or(StoreError::Unavailable("window"))?
        .location()
        .href()
        .map_err(|e| StoreError::History(js_error(&e)))?;
    Url::new(&href).map_err(|e| StoreError::History(js_error(&e)))
}

/// Whether a document with this `protocol` and `origin` may call
/// `replaceState`. Locally opened files report a `"null"` origin but can
/// still rewrite their URL; sandboxed documents cannot.
pub fn history_allowed(protocol: &str, origin: &str) -> bool {
    if OPAQUE_SCHEMES.contains(&protocol) {
        return false;
    }
    protocol == "file:" || origin != "null"
}

/// False inside sandboxed or opaque-origin documents
pub fn history_writable() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_default();
    let origin = location.origin().unwrap_or_default();
    history_allowed(&protocol, &origin)
}

/// Value of query parameter `name` in the page URL
pub fn read_query_param(name: &str) -> Option<String> {
    current_url().ok()?.search_params().get(name)
}

/// Set (Some) or remove (None) query parameter `name` in place.
/// Skipped when the document may not rewrite its URL.
pub fn set_query_param(name: &str, value: Option<&str>) -> StoreResult<()> {
    if !history_writable() {
        log::debug!("[URL] history is not writable here, skipping update of '{}'", name);
        return Ok(());
    }

    let url = current_url()?;
    let params = url.search_params();
    if params.get(name).as_deref() == value {
        return Ok(());
    }
    match value {
        Some(v) => params.set(name, v),
        None => params.delete(name),
    }

    web_sys::window()
        .ok_or(StoreError::Unavailable("window"))?
        .history()
        .map_err(|e| StoreError::History(js_error(&e)))?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url.href()))
        .map_err(|e| StoreError::History(js_error(&e)))
}

/// Page URL carrying `token` in parameter `name` (removed when empty)
pub fn share_url(name: &str, token: &str) -> StoreResult<String> {
    let url = current_url()?;
    let params = url.search_params();
    if token.is_empty() {
        params.delete(name);
    } else {
        params.set(name, token);
    }
    Ok(url.href())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_allowed() {
        assert!(history_allowed("https:", "https://shop.example"));
        assert!(history_allowed("http:", "http://localhost:8080"));
        assert!(history_allowed("file:", "null"));

        assert!(!history_allowed("blob:", "https://shop.example"));
        assert!(!history_allowed("data:", "null"));
        assert!(!history_allowed("about:", "null"));
        // sandboxed iframe without allow-same-origin
        assert!(!history_allowed("https:", "null"));
    }
}
