//! Status Modal Component
//!
//! Shows the current status message: plain info, a spinner, or a
//! confirmation with cancel/confirm buttons.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::status::{ConfirmAction, StatusKind};
use crate::store::{store_clear_items, store_remove_saved_list, use_app_store};

/// Pause between the "clearing" spinner and the result message
const CLEAR_FEEDBACK_DELAY_MS: u32 = 500;

#[component]
pub fn StatusModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let run_action = move |action: ConfirmAction| match action {
        ConfirmAction::ClearAll => {
            ctx.show_loading("Clearing the list...");
            store_clear_items(&store);
            Timeout::new(CLEAR_FEEDBACK_DELAY_MS, move || ctx.notify("The list was cleared!")).forget();
        }
        ConfirmAction::DeleteSavedList(list_id) => {
            store_remove_saved_list(&store, &list_id);
            ctx.dismiss_status();
        }
    };

    let current = move || ctx.status.with(|board| board.current().cloned());

    view! {
        <div class=move || if current().is_some() { "modal-backdrop open" } else { "modal-backdrop" }>
            {move || current().map(|message| {
                let spinner = matches!(message.kind, StatusKind::Loading)
                    .then(|| view! { <div class="modal-loading"></div> });
                let actions = match message.kind {
                    StatusKind::Confirm(action) => {
                        let label = action.label();
                        Some(view! {
                            <div class="modal-actions">
                                <button class="modal-cancel" on:click=move |_| ctx.dismiss_status()>
                                    "Cancel"
                                </button>
                                <button class="modal-confirm" on:click=move |_| run_action(action.clone())>
                                    {label}
                                </button>
                            </div>
                        })
                    }
                    _ => None,
                };
                view! {
                    <div class="modal-content">
                        {spinner}
                        <p class="modal-message">{message.text}</p>
                        {actions}
                    </div>
                }
            })}
        </div>
    }
}
