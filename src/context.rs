//! Application Context
//!
//! Shared configuration and the status modal, provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::status::{ConfirmAction, StatusBoard, StatusKind};

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Configuration loaded at startup
    pub config: StoredValue<AppConfig>,
    /// Message currently shown in the modal
    pub status: RwSignal<StatusBoard>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            status: RwSignal::new(StatusBoard::default()),
        }
    }

    /// Show an info message that hides itself after `duration_ms` (0 = stays)
    pub fn notify_for(&self, text: impl Into<String>, duration_ms: u32) {
        let token = self.status.try_update(|board| board.show(text, StatusKind::Info));
        if let (Some(token), true) = (token, duration_ms > 0) {
            let status = self.status;
            Timeout::new(duration_ms, move || {
                status.update(|board| {
                    board.dismiss(token);
                });
            })
            .forget();
        }
    }

    /// Show an info message for the configured default duration
    pub fn notify(&self, text: impl Into<String>) {
        let duration = self.config.with_value(|c| c.status_duration_ms);
        self.notify_for(text, duration);
    }

    /// Show a spinner message; replaced by the next message
    pub fn show_loading(&self, text: impl Into<String>) {
        self.status.update(|board| {
            board.show(text, StatusKind::Loading);
        });
    }

    /// Ask the user to confirm `action`; the modal runs it on accept
    pub fn ask_confirm(&self, text: impl Into<String>, action: ConfirmAction) {
        self.status.update(|board| {
            board.show(text, StatusKind::Confirm(action));
        });
    }

    /// Close the modal
    pub fn dismiss_status(&self) {
        self.status.update(StatusBoard::clear);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
