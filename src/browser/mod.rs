//! Browser Glue
//!
//! Local storage, the page URL and the clipboard, organized by API.

mod clipboard;
mod location;
mod storage;

use crate::config::AppConfig;
use crate::error::StoreResult;
use crate::list_store::ListPersistence;
use crate::models::{Item, SavedList};

// Re-export all public items
pub use clipboard::*;
pub use location::*;
pub use storage::*;

/// [`ListPersistence`] backed by `window.localStorage` and the History API
#[derive(Debug, Clone)]
pub struct BrowserPersistence {
    items_key: String,
    saved_lists_key: String,
    share_param: String,
}

impl From<&AppConfig> for BrowserPersistence {
    fn from(config: &AppConfig) -> Self {
        Self {
            items_key: config.items_key.clone(),
            saved_lists_key: config.saved_lists_key.clone(),
            share_param: config.share_param.clone(),
        }
    }
}

impl ListPersistence for BrowserPersistence {
    fn load_items(&self) -> StoreResult<Vec<Item>> {
        Ok(read_json(&self.items_key)?.unwrap_or_default())
    }

    fn save_items(&self, items: &[Item]) -> StoreResult<()> {
        write_json(&self.items_key, items)
    }

    fn load_saved_lists(&self) -> StoreResult<Vec<SavedList>> {
        Ok(read_json(&self.saved_lists_key)?.unwrap_or_default())
    }

    fn save_saved_lists(&self, lists: &[SavedList]) -> StoreResult<()> {
        write_json(&self.saved_lists_key, lists)
    }

    fn read_share_token(&self) -> Option<String> {
        read_query_param(&self.share_param)
    }

    fn write_share_token(&self, token: &str) -> StoreResult<()> {
        let value = (!token.is_empty()).then_some(token);
        set_query_param(&self.share_param, value)
    }
}
