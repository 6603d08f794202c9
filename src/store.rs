//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser::BrowserPersistence;
use crate::list_store::{AddOutcome, ListStore};
use crate::models::{Item, ItemId, SavedList};

/// How the list view groups items
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// "To buy" and "Purchased" sections
    #[default]
    Status,
    /// One section per category
    Category,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// The live list and its saved snapshots
    pub list: ListStore<BrowserPersistence>,
    pub view_mode: ViewMode,
}

impl AppState {
    pub fn new(list: ListStore<BrowserPersistence>, view_mode: ViewMode) -> Self {
        Self { list, view_mode }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the (sorted) items
pub fn store_items(store: &AppStore) -> Vec<Item> {
    store.list().read().items().to_vec()
}

pub fn store_saved_lists(store: &AppStore) -> Vec<SavedList> {
    store.list().read().saved_lists().to_vec()
}

/// Add free text (one item per line)
pub fn store_add_text(store: &AppStore, text: &str) -> AddOutcome {
    store.list().write().add(text)
}

pub fn store_add_quick_pick(store: &AppStore, name: &str) -> AddOutcome {
    store.list().write().add_quick_pick(name)
}

/// Toggle purchased state of an item by ID
pub fn store_toggle_item(store: &AppStore, item_id: &ItemId) {
    store.list().write().toggle(item_id);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: &ItemId) {
    store.list().write().delete(item_id);
}

pub fn store_clear_items(store: &AppStore) {
    store.list().write().clear_all();
}

pub fn store_share_token(store: &AppStore) -> String {
    store.list().read().share_token()
}

/// Save the current items as a named snapshot
pub fn store_save_list(store: &AppStore, name: &str) -> Option<SavedList> {
    store.list().write().save_list(name)
}

/// True when a saved list already uses `name`
pub fn store_has_saved_list(store: &AppStore, name: &str) -> bool {
    store.list().read().has_saved_list_named(name)
}

pub fn store_load_saved_list(store: &AppStore, list_id: &ItemId) -> bool {
    store.list().write().load_saved_list(list_id)
}

pub fn store_remove_saved_list(store: &AppStore, list_id: &ItemId) {
    store.list().write().delete_saved_list(list_id);
}

pub fn store_view_mode(store: &AppStore) -> ViewMode {
    store.view_mode().get()
}

pub fn store_set_view_mode(store: &AppStore, mode: ViewMode) {
    store.view_mode().set(mode);
}
