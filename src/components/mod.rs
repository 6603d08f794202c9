//! UI Components
//!
//! Reusable Leptos components.

mod action_bar;
mod item_list_view;
mod item_row;
mod new_item_form;
mod quick_pick_panel;
mod saved_lists_panel;
mod status_modal;

pub use action_bar::ActionBar;
pub use item_list_view::ItemListView;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use quick_pick_panel::QuickPickPanel;
pub use saved_lists_panel::SavedListsPanel;
pub use status_modal::StatusModal;
