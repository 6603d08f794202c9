//! Error Types
//!
//! Failures of the browser side effects. None of them are fatal: the list
//! store logs them and keeps going.

/// Common result type for side-effect operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Side-effect errors
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Storage disabled, quota exceeded or write rejected
    Storage(String),
    /// Payload could not be (de)serialized
    Serialization(String),
    /// History API rejected the URL update
    History(String),
    /// Copy to clipboard rejected by the host page
    Clipboard(String),
    /// A browser API is missing (no window, no document, ...)
    Unavailable(&'static str),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Storage(msg) => write!(f, "Storage error: {}", msg),
            StoreError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            StoreError::History(msg) => write!(f, "History error: {}", msg),
            StoreError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
            StoreError::Unavailable(what) => write!(f, "Unavailable: {}", what),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Render a JS exception value for logging
pub(crate) fn js_error(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            StoreError::Storage("quota".into()).to_string(),
            "Storage error: quota"
        );
        assert_eq!(
            StoreError::Unavailable("window").to_string(),
            "Unavailable: window"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        assert!(matches!(StoreError::from(err), StoreError::Serialization(_)));
    }
}
