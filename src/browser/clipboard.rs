//! Clipboard
//!
//! Copies text with a temporary textarea and `document.execCommand("copy")`,
//! which keeps working inside embedded frames that block the async
//! clipboard API.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::error::{js_error, StoreError, StoreResult};

/// Copy `text` to the system clipboard
pub fn copy_text(text: &str) -> StoreResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(StoreError::Unavailable("document"))?;
    let body = document.body().ok_or(StoreError::Unavailable("document.body"))?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|e| StoreError::Clipboard(js_error(&e)))?
        .dyn_into()
        .map_err(|_| StoreError::Clipboard("created element is not a textarea".into()))?;
    textarea.set_value(text);
    let _ = textarea.set_attribute("readonly", "");
    let _ = textarea.style().set_property("position", "fixed");
    let _ = textarea.style().set_property("opacity", "0");

    body.append_child(&textarea)
        .map_err(|e| StoreError::Clipboard(js_error(&e)))?;
    textarea.select();

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or(StoreError::Unavailable("HTMLDocument"))
        .and_then(|doc| doc.exec_command("copy").map_err(|e| StoreError::Clipboard(js_error(&e))));
    let _ = body.remove_child(&textarea);

    match copied? {
        true => Ok(()),
        false => Err(StoreError::Clipboard("copy command was rejected".into())),
    }
}
