//! Item List View Component
//!
//! Renders the list grouped by purchased status or by category.

use leptos::prelude::*;

use crate::category::{GENERAL, TAKEN};
use crate::components::ItemRow;
use crate::models::Item;
use crate::ordering::{group_by_category, group_by_status};
use crate::store::{store_items, store_view_mode, use_app_store, ViewMode};

/// Heading shown for a category label
pub(crate) fn category_title(label: &str) -> String {
    match label {
        TAKEN => "✔️ Purchased".to_string(),
        GENERAL => "General".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Message for an empty "to buy" section
pub(crate) fn empty_message(total: usize) -> &'static str {
    if total == 0 {
        "The list is empty! Time to add something..."
    } else {
        "Well done! Nothing left to buy."
    }
}

/// Titled block of rows
#[component]
fn ItemSection(title: String, items: Vec<Item>, #[prop(optional)] active: bool) -> impl IntoView {
    view! {
        <h2 class=if active { "list-title active-title" } else { "list-title" }>{title}</h2>
        <div class="list-container">
            {items
                .into_iter()
                .map(|item| view! { <ItemRow item=item /> })
                .collect_view()}
        </div>
    }
}

/// Item list grouped according to the current view mode
#[component]
pub fn ItemListView() -> impl IntoView {
    let store = use_app_store();

    // Rows are rebuilt whenever the list changes; item ids stay stable
    let by_status = move || {
        let items = store_items(&store);
        let (active, purchased) = group_by_status(&items);
        let active_title = format!("To buy ({}):", active.len());
        let active_view = if active.is_empty() {
            view! {
                <h2 class="list-title active-title">{active_title}</h2>
                <p class="empty-message">{empty_message(items.len())}</p>
            }
            .into_any()
        } else {
            view! { <ItemSection title=active_title items=active active=true /> }.into_any()
        };
        let purchased_view = (!purchased.is_empty()).then(|| {
            let title = format!("✔️ Purchased ({})", purchased.len());
            view! { <ItemSection title=title items=purchased /> }
        });
        view! {
            {active_view}
            {purchased_view}
        }
        .into_any()
    };

    let by_category = move || {
        let items = store_items(&store);
        if items.is_empty() {
            return view! { <p class="empty-message">{empty_message(0)}</p> }.into_any();
        }
        group_by_category(&items)
            .into_iter()
            .map(|(label, items)| {
                let title = format!("{} ({})", category_title(&label), items.len());
                view! { <ItemSection title=title items=items /> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="item-list-view">
            {move || match store_view_mode(&store) {
                ViewMode::Status => by_status(),
                ViewMode::Category => by_category(),
            }}
        </div>
    }
}
