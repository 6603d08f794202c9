//! Saved Lists Panel Component
//!
//! Save the current list under a name, restore or delete snapshots.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::status::ConfirmAction;
use crate::store::{
    store_has_saved_list, store_load_saved_list, store_save_list, store_saved_lists, use_app_store,
};

#[component]
pub fn SavedListsPanel() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (new_name, set_new_name) = signal(String::new());

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        if store_has_saved_list(&store, &name) {
            ctx.notify(format!("A list named \"{}\" already exists.", name.trim()));
            return;
        }
        match store_save_list(&store, &name) {
            Some(saved) => {
                set_new_name.set(String::new());
                ctx.notify(format!("Saved \"{}\" ({} items)", saved.name, saved.items.len()));
            }
            None => ctx.notify("Give the list a name first."),
        }
    };

    view! {
        <div class="saved-lists">
            <h2 class="list-title">"Saved lists"</h2>
            <form class="saved-list-form" on:submit=on_save>
                <input
                    type="text"
                    class="saved-list-input"
                    placeholder="Name this list..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit" class="save-button">"Save"</button>
            </form>
            <For
                each=move || store_saved_lists(&store)
                key=|list| list.id.clone()
                children=move |list| {
                    let load_id = list.id.clone();
                    let delete_id = list.id.clone();
                    let name = list.name.clone();
                    let question = format!("Delete the saved list \"{}\"?", list.name);
                    view! {
                        <div class="saved-list-row">
                            <span class="saved-list-name">{list.name}</span>
                            <span class="saved-list-count">{list.items.len()}</span>
                            <button
                                type="button"
                                class="load-button"
                                on:click=move |_| {
                                    if store_load_saved_list(&store, &load_id) {
                                        ctx.notify(format!("Loaded \"{}\"", name));
                                    }
                                }
                            >
                                "Load"
                            </button>
                            <button
                                type="button"
                                class="delete-btn"
                                on:click=move |_| {
                                    ctx.ask_confirm(
                                        question.clone(),
                                        ConfirmAction::DeleteSavedList(delete_id.clone()),
                                    )
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
