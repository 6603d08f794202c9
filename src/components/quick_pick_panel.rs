//! Quick Pick Panel Component
//!
//! Catalog of common items grouped by category; a tap adds the item.

use leptos::prelude::*;

use crate::category::quick_picks;
use crate::components::item_list_view::category_title;
use crate::components::new_item_form::added_message;
use crate::context::use_app_context;
use crate::store::{store_add_quick_pick, use_app_store};

#[component]
pub fn QuickPickPanel() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (open, set_open) = signal(false);

    view! {
        <div class="quick-pick">
            <button type="button" class="quick-pick-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || if open.get() { "▼ Quick add" } else { "▶ Quick add" }}
            </button>
            <Show when=move || open.get()>
                {quick_picks()
                    .into_iter()
                    .map(|group| view! {
                        <div class="quick-pick-group">
                            <h3 class="quick-pick-title">{category_title(group.category)}</h3>
                            <div class="quick-pick-chips">
                                {group.names.into_iter().map(|name| view! {
                                    <button
                                        type="button"
                                        class="quick-pick-chip"
                                        on:click=move |_| {
                                            let outcome = store_add_quick_pick(&store, name);
                                            ctx.notify(added_message(outcome.added));
                                        }
                                    >
                                        {name}
                                    </button>
                                }).collect_view()}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </Show>
        </div>
    }
}
