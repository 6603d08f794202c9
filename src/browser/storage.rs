//! Local Storage
//!
//! JSON records in `window.localStorage`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{js_error, StoreError, StoreResult};

fn local_storage() -> StoreResult<web_sys::Storage> {
    web_sys::window()
        .ok_or(StoreError::Unavailable("window"))?
        .local_storage()
        .map_err(|e| StoreError::Storage(js_error(&e)))?
        .ok_or(StoreError::Unavailable("localStorage"))
}

/// Raw string under `key`; None when missing or storage is unavailable
pub fn read_storage(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

/// Parse the JSON record under `key`; Ok(None) when the key is missing
pub fn read_json<T: DeserializeOwned>(key: &str) -> StoreResult<Option<T>> {
    let storage = local_storage()?;
    let Some(raw) = storage.get_item(key).map_err(|e| StoreError::Storage(js_error(&e)))? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Replace the record under `key` with `value` serialized as JSON
pub fn write_json<T: Serialize + ?Sized>(key: &str, value: &T) -> StoreResult<()> {
    let json = serde_json::to_string(value)?;
    local_storage()?
        .set_item(key, &json)
        .map_err(|e| StoreError::Storage(js_error(&e)))
}
