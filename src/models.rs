//! Frontend Models
//!
//! Data structures for the shopping list and its saved snapshots.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque unique item / saved-list identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        if getrandom::getrandom(&mut bytes).is_err() {
            // No entropy source: fall back to time + a process counter
            use std::sync::atomic::{AtomicU64, Ordering};
            static FALLBACK: AtomicU64 = AtomicU64::new(0);
            let seq = FALLBACK.fetch_add(1, Ordering::Relaxed);
            let now = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
            bytes[..8].copy_from_slice(&now.to_le_bytes());
            bytes[8..].copy_from_slice(&seq.to_le_bytes());
        }
        Self(bytes.iter().map(|b| format!("{:02x}", b)).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Shopping list item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default = "default_quantity", deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub purchased: bool,
    /// Creation time; missing values sort as the oldest
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Display bucket (`taken` while purchased)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Bucket to restore when the item is un-purchased
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_category: Option<String>,
}

impl Item {
    /// Create a new unpurchased item with a fresh id
    pub fn new(name: impl Into<String>, quantity: u32, created_at: i64) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            quantity: quantity.max(1),
            purchased: false,
            created_at: Some(created_at),
            category: None,
            original_category: None,
        }
    }

    /// Attach a category label assigned at creation
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Case-insensitive key used for duplicate detection
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }
}

/// Normalize a name for case-insensitive comparison
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Named, frozen copy of the list taken at save time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedList {
    pub id: ItemId,
    pub name: String,
    pub items: Vec<Item>,
    pub created_at: i64,
}

fn default_quantity() -> u32 {
    1
}

/// Accept any JSON value for a quantity; non-positive or non-numeric values become 1
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(quantity_from_value).unwrap_or(1))
}

/// Narrow an untrusted JSON quantity to a positive integer
pub fn quantity_from_value(value: &serde_json::Value) -> u32 {
    let raw = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match raw {
        Some(q) if q.is_finite() && q >= 1.0 => q.min(u32::MAX as f64) as u32,
        _ => 1,
    }
}
