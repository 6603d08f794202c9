//! Shopping List App
//!
//! Main application component: header, add form, list and actions.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser::BrowserPersistence;
use crate::components::{ActionBar, ItemListView, NewItemForm, QuickPickPanel, SavedListsPanel, StatusModal};
use crate::config::{AppConfig, PersistenceMode};
use crate::context::AppContext;
use crate::list_store::{ListStore, StoreOptions};
use crate::ordering::MergeReport;
use crate::store::{AppState, ViewMode};

/// Status line after importing a shared link
fn import_message(report: &MergeReport) -> String {
    match report.added {
        0 => "The shared list had nothing new.".to_string(),
        1 => "Loaded 1 item from the shared link.".to_string(),
        n => format!("Loaded {} items from the shared link.", n),
    }
}

fn subtitle(mode: PersistenceMode) -> &'static str {
    match mode {
        PersistenceMode::UrlOnly => "Saved and shared through the link only (nothing stored on this device)",
        PersistenceMode::LocalStorage => "Saved on this device; share with a link",
        PersistenceMode::Mirrored => "Saved on this device and in the link",
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let options = StoreOptions::from(&config);
    let (list, report) = ListStore::open(BrowserPersistence::from(&config), options);
    log::info!("[APP] Loaded {} items ({:?})", list.items().len(), options.mode);

    let ctx = AppContext::new(config);
    provide_context(ctx);
    provide_context(Store::new(AppState::new(list, ViewMode::default())));

    if let Some(report) = report {
        ctx.notify(import_message(&report));
    }

    view! {
        <div class="app-container">
            <header class="header">
                <h1>"🛒 Shopping List"</h1>
                <p>{subtitle(options.mode)}</p>
            </header>

            <NewItemForm />
            <QuickPickPanel />
            <ItemListView />
            <ActionBar />

            <Show when=move || options.mode.uses_storage()>
                <SavedListsPanel />
            </Show>
        </div>

        <StatusModal />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_message() {
        let report = |added| MergeReport { added, ..MergeReport::default() };
        assert_eq!(import_message(&report(0)), "The shared list had nothing new.");
        assert_eq!(import_message(&report(1)), "Loaded 1 item from the shared link.");
        assert_eq!(import_message(&report(4)), "Loaded 4 items from the shared link.");
    }
}
