//! Ordering Utilities
//!
//! Canonical item order, the duplicate-suppressing merge, and the groupings
//! the list view renders.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::category::{self, GENERAL};
use crate::models::Item;

/// Active items first, then newest first within each group.
/// Stable: equal keys keep their relative order.
pub fn sort_items(items: &mut [Item]) {
    items.sort_by_key(|item| (item.purchased, Reverse(item.created_at.unwrap_or(0))));
}

/// Sorted copy of `items`
pub fn sorted(items: &[Item]) -> Vec<Item> {
    let mut out = items.to_vec();
    sort_items(&mut out);
    out
}

/// What to do with an incoming item whose name already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Drop the incoming item
    Skip,
    /// Drop the incoming item and mark the existing one purchased
    #[default]
    MarkPurchased,
}

/// Result of a merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of incoming items inserted
    pub added: usize,
    /// Incoming items dropped as duplicates
    pub skipped: usize,
    /// Existing items marked purchased by the merge
    pub marked: usize,
}

/// Merge `incoming` into `existing`.
///
/// Names are compared case-insensitively against the existing collection and
/// earlier incoming items (first occurrence wins). New items are placed ahead
/// of the existing ones and the whole collection is re-sorted.
pub fn merge_items(existing: &mut Vec<Item>, incoming: Vec<Item>, policy: DuplicatePolicy) -> MergeReport {
    let mut report = MergeReport::default();
    let mut seen: HashSet<String> = existing.iter().map(Item::name_key).collect();
    let mut fresh = Vec::with_capacity(incoming.len());

    for item in incoming {
        let key = item.name_key();
        if key.is_empty() {
            report.skipped += 1;
            continue;
        }
        if seen.insert(key.clone()) {
            fresh.push(item);
            continue;
        }

        report.skipped += 1;
        if policy == DuplicatePolicy::MarkPurchased {
            if let Some(current) = existing.iter_mut().find(|i| i.name_key() == key) {
                if !current.purchased {
                    mark_purchased(current, true);
                    report.marked += 1;
                }
            }
        }
    }

    report.added = fresh.len();
    fresh.append(existing);
    *existing = fresh;
    sort_items(existing);
    report
}

/// Set the purchased flag, moving the category to/from the `taken` bucket.
/// Items without a category only flip the flag.
pub fn mark_purchased(item: &mut Item, purchased: bool) {
    if item.purchased == purchased {
        return;
    }
    item.purchased = purchased;
    if item.category.is_none() && item.original_category.is_none() {
        return;
    }
    if purchased {
        if item.category.as_deref() != Some(category::TAKEN) {
            item.original_category = item.category.take();
        }
        item.category = Some(category::TAKEN.to_string());
    } else {
        item.category = Some(item.original_category.take().unwrap_or_else(|| category::categorize(&item.name).to_string()));
    }
}

/// Split sorted items into (active, purchased)
pub fn group_by_status(items: &[Item]) -> (Vec<Item>, Vec<Item>) {
    sorted(items).into_iter().partition(|item| !item.purchased)
}

/// Group sorted items by category label.
///
/// Groups follow the keyword table order, then `general`, then unknown
/// labels, then `taken`. Items without a category land in `general`.
pub fn group_by_category(items: &[Item]) -> Vec<(String, Vec<Item>)> {
    let mut groups: BTreeMap<(usize, String), Vec<Item>> = BTreeMap::new();
    for item in sorted(items) {
        let label = item.category.clone().unwrap_or_else(|| GENERAL.to_string());
        groups
            .entry((category::category_rank(&label), label))
            .or_default()
            .push(item);
    }
    groups.into_iter().map(|((_, label), items)| (label, items)).collect()
}
