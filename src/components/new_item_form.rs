//! New Item Form Component
//!
//! Multi-line form for adding items, one per line (`name * 3` or `name (3)`
//! sets a quantity).

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_add_text, use_app_store};

/// Visible textarea rows never exceed this
const MAX_INPUT_ROWS: usize = 5;

/// Rows needed to show `text`, between 1 and [`MAX_INPUT_ROWS`]
fn input_rows(text: &str) -> usize {
    text.split('\n').count().clamp(1, MAX_INPUT_ROWS)
}

/// Status line for an add result
pub(crate) fn added_message(added: usize) -> String {
    match added {
        0 => "No new items were added (they may already be on the list).".to_string(),
        1 => "Added 1 new item!".to_string(),
        n => format!("Added {} new items!", n),
    }
}

/// Form for adding items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let add_items = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let outcome = store_add_text(&store, &text);
        log::debug!("[ADD] {} added, {} skipped", outcome.added, outcome.skipped);
        set_new_text.set(String::new());
        ctx.notify(added_message(outcome.added));
    };

    view! {
        <form class="add-form" on:submit=add_items>
            <div class="input-group">
                <textarea
                    class="item-input"
                    placeholder="Add items (one per line)\ne.g.\ncucumber * 5\nalmond milk"
                    rows=move || input_rows(&new_text.get()).to_string()
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit" class="add-button">"Add"</button>
            </div>
        </form>
    }
}
