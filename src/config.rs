//! Application Configuration
//!
//! Storage keys, persistence mode and UI timings. Defaults can be overridden
//! by a JSON document kept in local storage under [`CONFIG_KEY`].

use serde::Deserialize;

use crate::ordering::DuplicatePolicy;

/// Local storage key of the optional override document
pub const CONFIG_KEY: &str = "shopping-list.config";

/// Where the live list is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceMode {
    /// Only the `list` URL parameter holds the list
    UrlOnly,
    /// Local storage holds the list; shared links are imported then stripped
    #[default]
    LocalStorage,
    /// Local storage plus a live URL parameter
    Mirrored,
}

impl PersistenceMode {
    pub fn uses_storage(self) -> bool {
        matches!(self, PersistenceMode::LocalStorage | PersistenceMode::Mirrored)
    }

    pub fn uses_url(self) -> bool {
        matches!(self, PersistenceMode::UrlOnly | PersistenceMode::Mirrored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub persistence: PersistenceMode,
    pub items_key: String,
    pub saved_lists_key: String,
    /// URL query parameter carrying the share token
    pub share_param: String,
    /// Assign keyword categories to new items
    pub categorize: bool,
    /// How shared-link duplicates are handled on import
    pub shared_duplicates: DuplicatePolicy,
    pub status_duration_ms: u32,
    pub share_status_duration_ms: u32,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            persistence: PersistenceMode::default(),
            items_key: "shopping-list.items".to_string(),
            saved_lists_key: "shopping-list.saved-lists".to_string(),
            share_param: "list".to_string(),
            categorize: true,
            shared_duplicates: DuplicatePolicy::default(),
            status_duration_ms: 1500,
            share_status_duration_ms: 3000,
            log_level: LogLevel::Info,
        }
    }
}

impl AppConfig {
    /// Parse an override document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the override from local storage, falling back to defaults
    pub fn load() -> Self {
        let Some(raw) = crate::browser::read_storage(CONFIG_KEY) else {
            return Self::default();
        };
        Self::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("ignoring malformed config override: {}", e);
            Self::default()
        })
    }
}
