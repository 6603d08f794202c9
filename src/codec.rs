//! Share Token Codec
//!
//! Encodes the active (unpurchased) items into a URL-safe token and back.
//!
//! Token layout: base64url without padding over the UTF-8 bytes of a JSON
//! array of `{"n": name, "q": quantity}` records.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use serde_json::Value;

use crate::models::{now_millis, quantity_from_value, Item, ItemId};

/// URL-safe alphabet; no padding on encode, padding optional on decode
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Serialize)]
struct CompactItem<'a> {
    n: &'a str,
    q: u32,
}

/// Encode the unpurchased items; empty string when there are none
pub fn encode(items: &[Item]) -> String {
    let compact: Vec<CompactItem<'_>> = items
        .iter()
        .filter(|item| !item.purchased)
        .map(|item| CompactItem { n: item.name.trim(), q: item.quantity.max(1) })
        .collect();
    if compact.is_empty() {
        return String::new();
    }

    match serde_json::to_vec(&compact) {
        Ok(json) => TOKEN_ENGINE.encode(json),
        Err(e) => {
            log::warn!("share token encode failed: {}", e);
            String::new()
        }
    }
}

/// Decode a share token into fresh, unpurchased items.
///
/// Malformed tokens yield an empty list. Records without a usable name are
/// dropped; quantities are clamped to at least 1.
pub fn decode(token: &str) -> Vec<Item> {
    let token = token.trim();
    if token.is_empty() {
        return Vec::new();
    }

    let bytes = match TOKEN_ENGINE.decode(token) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("share token is not base64url: {}", e);
            return Vec::new();
        }
    };

    let Some(Value::Array(records)) = parse_payload(&bytes) else {
        log::warn!("share token payload is not a JSON array");
        return Vec::new();
    };

    let now = now_millis();
    records.iter().filter_map(|record| rehydrate(record, now)).collect()
}

/// Plain JSON first; tokens from older links carry percent-encoded JSON
fn parse_payload(bytes: &[u8]) -> Option<Value> {
    if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
        return Some(value);
    }
    let text = std::str::from_utf8(bytes).ok()?;
    let decoded = percent_decode_str(text).decode_utf8().ok()?;
    serde_json::from_str(&decoded).ok()
}

/// Fresh item from one decoded record. A missing name reads as empty; a
/// name that is empty after trimming drops the record, since items always
/// carry a non-empty name.
fn rehydrate(record: &Value, now: i64) -> Option<Item> {
    let name = record.get("n").and_then(Value::as_str).unwrap_or_default().trim();
    if name.is_empty() {
        return None;
    }
    let quantity = record.get("q").map(quantity_from_value).unwrap_or(1);
    Some(Item {
        id: ItemId::generate(),
        name: name.to_string(),
        quantity,
        purchased: false,
        created_at: Some(now),
        category: None,
        original_category: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn pairs(items: &[Item]) -> Vec<(String, u32)> {
        items.iter().map(|i| (i.name.clone(), i.quantity)).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(&[]), "");
        assert!(decode("").is_empty());
        assert!(decode("   ").is_empty());
    }

    #[test]
    fn test_token_is_url_safe() {
        // Enough varied bytes to exercise `+`, `/` and padding in standard base64
        let items: Vec<Item> = (0..20)
            .map(|i| Item::new(format!("item?>~{}", "ÿ".repeat(i)), i as u32 + 1, 0))
            .collect();
        let token = encode(&items);
        assert!(!token.is_empty());
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(pairs(&decode(&token)), pairs(&items));
    }

    #[test]
    fn test_compact_payload_shape() {
        let token = encode(&[Item::new(" milk ", 2, 0)]);
        let json = TOKEN_ENGINE.decode(&token).unwrap();
        assert_eq!(String::from_utf8(json).unwrap(), r#"[{"n":"milk","q":2}]"#);
    }

    #[test]
    fn test_purchased_items_excluded() {
        let mut bought = Item::new("bread", 1, 0);
        bought.purchased = true;
        let items = vec![bought, Item::new("milk", 3, 0)];
        let decoded = decode(&encode(&items));
        assert_eq!(pairs(&decoded), vec![("milk".to_string(), 3)]);
    }

    #[test]
    fn test_all_purchased_encodes_empty() {
        let mut bought = Item::new("bread", 1, 0);
        bought.purchased = true;
        assert_eq!(encode(&[bought]), "");
    }

    #[test]
    fn test_decoded_items_are_fresh() {
        let original = Item::new("milk", 1, 5);
        let decoded = decode(&encode(&[original.clone()]));
        assert_eq!(decoded.len(), 1);
        assert_ne!(decoded[0].id, original.id);
        assert!(!decoded[0].purchased);
        assert!(decoded[0].created_at.is_some());
    }

    #[test]
    fn test_malformed_tokens_decode_empty() {
        assert!(decode("!!!not-base64!!!").is_empty());
        // valid base64url of `{"n":"x"}` (an object, not an array)
        assert!(decode(&TOKEN_ENGINE.encode(r#"{"n":"x"}"#)).is_empty());
        assert!(decode(&TOKEN_ENGINE.encode("not json")).is_empty());
    }

    #[test]
    fn test_padded_token_accepted() {
        let padded = base64::engine::general_purpose::URL_SAFE.encode(r#"[{"n":"tea","q":1}]"#);
        assert!(padded.ends_with('='));
        assert_eq!(pairs(&decode(&padded)), vec![("tea".to_string(), 1)]);
    }

    #[test]
    fn test_record_narrowing() {
        let payload = r#"[{"n":"  eggs ","q":0},{"q":4},{"n":"rice","q":-2},{"n":"oil"},7]"#;
        let decoded = decode(&TOKEN_ENGINE.encode(payload));
        assert_eq!(
            pairs(&decoded),
            vec![("eggs".to_string(), 1), ("rice".to_string(), 1), ("oil".to_string(), 1)]
        );
    }

    #[test]
    fn test_percent_encoded_payload_accepted() {
        // base64 of encodeURIComponent('[{"n":"חלב","q":2}]')
        let escaped = "%5B%7B%22n%22%3A%22%D7%97%D7%9C%D7%91%22%2C%22q%22%3A2%7D%5D";
        let decoded = decode(&TOKEN_ENGINE.encode(escaped));
        assert_eq!(pairs(&decoded), vec![("חלב".to_string(), 2)]);
    }

    #[test]
    fn test_right_to_left_round_trip() {
        let items = vec![Item::new("מלפפון", 5, 0), Item::new("חלב שקדים", 1, 0)];
        assert_eq!(pairs(&decode(&encode(&items))), pairs(&items));
    }

    proptest! {
        #[test]
        fn prop_round_trip_preserves_pairs(
            entries in prop::collection::vec(("[^\\s]\\PC{0,12}[^\\s]", 1u32..10_000), 0..12)
        ) {
            let items: Vec<Item> = entries
                .iter()
                .map(|(name, q)| Item::new(name.clone(), *q, 0))
                .collect();
            let decoded = decode(&encode(&items));
            prop_assert_eq!(pairs(&decoded), pairs(&items));
        }
    }
}
