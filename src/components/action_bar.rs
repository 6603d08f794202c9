//! Action Bar Component
//!
//! Share link, view mode switch and "clear all".

use leptos::prelude::*;

use crate::browser;
use crate::context::use_app_context;
use crate::status::ConfirmAction;
use crate::store::{
    store_items, store_set_view_mode, store_share_token, store_view_mode, use_app_store, ViewMode,
};

#[component]
pub fn ActionBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let copy_share_link = move |_| {
        let param = ctx.config.with_value(|c| c.share_param.clone());
        let token = store_share_token(&store);
        let url = match browser::share_url(&param, &token) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("[SHARE] could not build share URL: {}", e);
                ctx.notify_for("Could not build the share link.", 0);
                return;
            }
        };
        match browser::copy_text(&url) {
            Ok(()) => {
                let duration = ctx.config.with_value(|c| c.share_status_duration_ms);
                ctx.notify_for(
                    "Link copied! Only items still to buy are included in the link.",
                    duration,
                );
            }
            Err(e) => {
                log::warn!("[SHARE] copy failed: {}", e);
                ctx.notify_for(format!("Copy failed. Please copy manually: {}", url), 0);
            }
        }
    };

    let ask_clear = move |_| {
        ctx.ask_confirm(
            "Are you sure you want to delete the whole shopping list?",
            ConfirmAction::ClearAll,
        );
    };

    let toggle_view = move |_| {
        let next = match store_view_mode(&store) {
            ViewMode::Status => ViewMode::Category,
            ViewMode::Category => ViewMode::Status,
        };
        store_set_view_mode(&store, next);
    };

    let has_items = move || !store_items(&store).is_empty();
    let categorize = ctx.config.with_value(|c| c.categorize);

    view! {
        <div class="action-buttons">
            <button type="button" class="share-button" on:click=copy_share_link>
                "🔗 Copy share link"
            </button>
            <Show when=move || categorize>
                <button type="button" class="view-button" on:click=toggle_view>
                    {move || match store_view_mode(&store) {
                        ViewMode::Status => "🗂️ By category",
                        ViewMode::Category => "☑️ By status",
                    }}
                </button>
            </Show>
            <Show when=has_items>
                <button type="button" class="clear-button" on:click=ask_clear>
                    "🗑️ Clear all"
                </button>
            </Show>
        </div>
    }
}
