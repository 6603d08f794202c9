//! Item Row Component
//!
//! One list row: tap toggles purchased, swipe removes it.

use leptos::prelude::*;
use leptos_swipe::*;

use crate::models::Item;
use crate::store::{store_remove_item, store_toggle_item, use_app_store};

/// A single item row
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();
    let swipe = create_swipe_signals();

    let id = item.id.clone();
    let purchased = item.purchased;
    let row_id = format!("item-{}", item.id);

    let toggle_id = id.clone();
    let on_click = move |_| {
        // The click that ends a swipe is not a tap
        if swipe.swipe_just_ended_read.get_untracked() {
            return;
        }
        store_toggle_item(&store, &toggle_id);
    };

    let on_dismiss = move || store_remove_item(&store, &id);

    view! {
        <div
            id=row_id
            class=if purchased { "list-item purchased" } else { "list-item" }
            style=swipe_style(swipe, SwipeDirection::Right)
            on:click=on_click
            on:pointerdown=make_on_pointerdown(swipe)
            on:pointermove=make_on_pointermove(swipe, SwipeDirection::Right)
            on:pointerup=make_on_pointerup(swipe, SwipeDirection::Right, on_dismiss)
            on:pointercancel=make_on_pointercancel(swipe)
        >
            <span class="item-name">{item.name}</span>
            <span class="item-quantity">{item.quantity}</span>
        </div>
    }
}
