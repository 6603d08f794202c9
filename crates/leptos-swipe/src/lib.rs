//! Leptos Swipe Utilities
//!
//! Swipe-to-dismiss for list rows using pointer events.
//! Uses a movement threshold to distinguish a tap from a swipe.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Direction a row has to travel to be dismissed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwipeDirection {
    Left,
    /// Right-to-left layouts dismiss towards the right
    #[default]
    Right,
}

/// What a pointer release means
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Barely moved: let the click through
    Tap,
    /// Moved, but not far enough: slide back
    SnapBack,
    /// Far enough in the dismiss direction
    Dismiss,
}

/// Swipe state signals for one row
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Pointer x at pointerdown (None = no gesture in progress)
    pub start_x_read: ReadSignal<Option<i32>>,
    pub start_x_write: WriteSignal<Option<i32>>,
    /// Current visual offset in pixels
    pub offset_read: ReadSignal<i32>,
    pub offset_write: WriteSignal<i32>,
    /// Movement passed the tap threshold
    pub swiping_read: ReadSignal<bool>,
    pub swiping_write: WriteSignal<bool>,
    /// Row is animating out
    pub dismissed_read: ReadSignal<bool>,
    pub dismissed_write: WriteSignal<bool>,
    /// A swipe just ended; the click that follows must be ignored
    pub swipe_just_ended_read: ReadSignal<bool>,
    pub swipe_just_ended_write: WriteSignal<bool>,
}

/// Movement in pixels before a press counts as a swipe
const TAP_THRESHOLD_PX: i32 = 10;

/// Distance in the dismiss direction that removes the row
const DISMISS_THRESHOLD_PX: i32 = 80;

/// Slide-out animation length before `on_dismiss` runs
const DISMISS_DELAY_MS: i32 = 300;

/// Window during which the click after a swipe is swallowed
const CLICK_GUARD_MS: i32 = 100;

pub fn create_swipe_signals() -> SwipeSignals {
    let (start_x_read, start_x_write) = signal(None::<i32>);
    let (offset_read, offset_write) = signal(0i32);
    let (swiping_read, swiping_write) = signal(false);
    let (dismissed_read, dismissed_write) = signal(false);
    let (swipe_just_ended_read, swipe_just_ended_write) = signal(false);
    SwipeSignals {
        start_x_read,
        start_x_write,
        offset_read,
        offset_write,
        swiping_read,
        swiping_write,
        dismissed_read,
        dismissed_write,
        swipe_just_ended_read,
        swipe_just_ended_write,
    }
}

/// Visual offset for a raw horizontal distance: only movement in the
/// dismiss direction is shown, capped at `max`
pub fn visible_offset(distance: i32, direction: SwipeDirection, max: i32) -> i32 {
    match direction {
        SwipeDirection::Right => distance.clamp(0, max.max(0)),
        SwipeDirection::Left => distance.clamp(-max.max(0), 0),
    }
}

/// Classify a pointer release by the total horizontal distance
pub fn classify_release(distance: i32, direction: SwipeDirection) -> Release {
    let along = match direction {
        SwipeDirection::Right => distance,
        SwipeDirection::Left => -distance,
    };
    if along > DISMISS_THRESHOLD_PX {
        Release::Dismiss
    } else if distance.abs() > TAP_THRESHOLD_PX {
        Release::SnapBack
    } else {
        Release::Tap
    }
}

fn run_later(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(win) = web_sys::window() {
        let cb = wasm_bindgen::closure::Closure::once(f);
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms);
        cb.forget();
    }
}

/// Reset gesture state after a release
fn end_swipe(swipe: &SwipeSignals, was_swiping: bool) {
    swipe.start_x_write.set(None);
    swipe.swiping_write.set(false);

    if was_swiping {
        swipe.swipe_just_ended_write.set(true);
        let clear = swipe.swipe_just_ended_write;
        run_later(CLICK_GUARD_MS, move || clear.set(false));
    }
}

/// Create pointerdown handler: records the start position and captures the pointer
pub fn make_on_pointerdown(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if swipe.dismissed_read.get_untracked() {
            return;
        }
        swipe.start_x_write.set(Some(ev.client_x()));
        swipe.swiping_write.set(false);
        if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let _ = el.set_pointer_capture(ev.pointer_id());
        }
    }
}

/// Create pointermove handler: follows the pointer once past the tap threshold
pub fn make_on_pointermove(swipe: SwipeSignals, direction: SwipeDirection) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        let Some(start_x) = swipe.start_x_read.get_untracked() else {
            return;
        };
        let distance = ev.client_x() - start_x;
        if distance.abs() > TAP_THRESHOLD_PX {
            swipe.swiping_write.set(true);
        }
        if swipe.swiping_read.get_untracked() {
            let width = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .map(|el| el.client_width())
                .unwrap_or(i32::MAX);
            swipe.offset_write.set(visible_offset(distance, direction, width));
        }
    }
}

/// Create pointerup handler: dismisses or snaps back.
/// `on_dismiss` runs after the slide-out animation.
pub fn make_on_pointerup<F>(swipe: SwipeSignals, direction: SwipeDirection, on_dismiss: F) -> impl Fn(web_sys::PointerEvent) + Clone + 'static
where
    F: Fn() + Clone + 'static,
{
    move |ev: web_sys::PointerEvent| {
        let Some(start_x) = swipe.start_x_read.get_untracked() else {
            return;
        };
        let was_swiping = swipe.swiping_read.get_untracked();
        match classify_release(ev.client_x() - start_x, direction) {
            Release::Dismiss => {
                swipe.dismissed_write.set(true);
                let on_dismiss = on_dismiss.clone();
                run_later(DISMISS_DELAY_MS, move || on_dismiss());
            }
            Release::SnapBack | Release::Tap => swipe.offset_write.set(0),
        }
        end_swipe(&swipe, was_swiping);
    }
}

/// Create pointercancel handler: abandons the gesture
pub fn make_on_pointercancel(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        swipe.offset_write.set(0);
        end_swipe(&swipe, swipe.swiping_read.get_untracked());
    }
}

/// Inline style following the gesture (no transition while dragging)
pub fn swipe_style(swipe: SwipeSignals, direction: SwipeDirection) -> impl Fn() -> String + Copy + 'static {
    move || {
        if swipe.dismissed_read.get() {
            let out = match direction {
                SwipeDirection::Right => "100%",
                SwipeDirection::Left => "-100%",
            };
            return format!("transform: translateX({}); opacity: 0; transition: transform 0.3s, opacity 0.3s;", out);
        }
        let transition = if swipe.swiping_read.get() { "none" } else { "transform 0.3s" };
        format!("transform: translateX({}px); transition: {};", swipe.offset_read.get(), transition)
    }
}
