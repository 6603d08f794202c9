//! Status Messages
//!
//! Transient messages shown in the modal. Every message gets a token; a
//! delayed dismiss only clears the modal while its token is still current,
//! so an old timer cannot hide a newer message.

use crate::models::ItemId;

/// Identifies one shown message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusToken(u64);

/// Action run when a confirm message is accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    ClearAll,
    DeleteSavedList(ItemId),
}

impl ConfirmAction {
    /// Label of the accept button
    pub fn label(&self) -> &'static str {
        match self {
            ConfirmAction::ClearAll => "Clear all",
            ConfirmAction::DeleteSavedList(_) => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Loading,
    Confirm(ConfirmAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub token: StatusToken,
    pub text: String,
    pub kind: StatusKind,
}

/// Holds at most one message at a time
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    current: Option<StatusMessage>,
    last_token: u64,
}

impl StatusBoard {
    /// Replace the current message and return its token
    pub fn show(&mut self, text: impl Into<String>, kind: StatusKind) -> StatusToken {
        self.last_token += 1;
        let token = StatusToken(self.last_token);
        self.current = Some(StatusMessage { token, text: text.into(), kind });
        token
    }

    /// Clear the message if `token` is still the one displayed
    pub fn dismiss(&mut self, token: StatusToken) -> bool {
        match &self.current {
            Some(message) if message.token == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Clear whatever is displayed
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}
