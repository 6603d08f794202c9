//! List Store
//!
//! Owns the item collection and the saved-list snapshots. Every mutation
//! re-sorts the collection and then writes it out through a
//! [`ListPersistence`] backend (local storage and/or the share URL).
//! Side-effect failures are logged and swallowed.

use crate::codec;
use crate::config::{AppConfig, PersistenceMode};
use crate::error::StoreResult;
use crate::models::{name_key, now_millis, Item, ItemId, SavedList};
use crate::ordering::{self, DuplicatePolicy, MergeReport};
use crate::parser;

/// Where the store reads and writes its durable state
pub trait ListPersistence {
    fn load_items(&self) -> StoreResult<Vec<Item>>;
    fn save_items(&self, items: &[Item]) -> StoreResult<()>;
    fn load_saved_lists(&self) -> StoreResult<Vec<SavedList>>;
    fn save_saved_lists(&self, lists: &[SavedList]) -> StoreResult<()>;
    /// Share token currently in the page URL
    fn read_share_token(&self) -> Option<String>;
    /// Put `token` in the page URL; an empty token removes the parameter
    fn write_share_token(&self, token: &str) -> StoreResult<()>;
}

/// Behavior switches taken from [`AppConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreOptions {
    pub mode: PersistenceMode,
    pub categorize: bool,
    pub shared_duplicates: DuplicatePolicy,
}

impl From<&AppConfig> for StoreOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            mode: config.persistence,
            categorize: config.categorize,
            shared_duplicates: config.shared_duplicates,
        }
    }
}

/// Result of an add
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddOutcome {
    pub added: usize,
    /// Lines dropped because the name already exists
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct ListStore<P> {
    items: Vec<Item>,
    saved_lists: Vec<SavedList>,
    persistence: P,
    options: StoreOptions,
}

impl<P: ListPersistence> ListStore<P> {
    /// Empty store; nothing is read from `persistence`
    pub fn new(persistence: P, options: StoreOptions) -> Self {
        Self { items: Vec::new(), saved_lists: Vec::new(), persistence, options }
    }

    /// Load the stored list, then import a share token found in the URL.
    ///
    /// Returns the store and the merge report when a token was imported.
    pub fn open(persistence: P, options: StoreOptions) -> (Self, Option<MergeReport>) {
        let mut store = Self::new(persistence, options);

        if options.mode.uses_storage() {
            store.items = store.persistence.load_items().unwrap_or_else(|e| {
                log::warn!("could not load stored items: {}", e);
                Vec::new()
            });
            store.saved_lists = store.persistence.load_saved_lists().unwrap_or_else(|e| {
                log::warn!("could not load saved lists: {}", e);
                Vec::new()
            });
        }
        ordering::sort_items(&mut store.items);

        let report = match store.persistence.read_share_token() {
            Some(token) if !token.trim().is_empty() => store.import_token(token.trim()),
            _ => None,
        };
        store.sync();
        (store, report)
    }

    fn import_token(&mut self, token: &str) -> Option<MergeReport> {
        if token == codec::encode(&self.items) {
            log::debug!("share token mirrors the current list, not importing");
            return None;
        }
        let report = self.import_shared(token);
        log::info!(
            "imported shared list: {} added, {} duplicates, {} marked purchased",
            report.added,
            report.skipped,
            report.marked
        );
        Some(report)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn saved_lists(&self) -> &[SavedList] {
        &self.saved_lists
    }

    /// Add one or more lines of free text. Names already in the list
    /// (purchased ones included) are skipped case-insensitively.
    pub fn add(&mut self, text: &str) -> AddOutcome {
        let now = now_millis();
        let incoming: Vec<Item> = parser::parse_lines(text, self.options.categorize)
            .into_iter()
            .map(|line| {
                let item = Item::new(line.name, line.quantity, now);
                match line.category {
                    Some(category) => item.with_category(category),
                    None => item,
                }
            })
            .collect();
        if incoming.is_empty() {
            return AddOutcome::default();
        }

        let report = ordering::merge_items(&mut self.items, incoming, DuplicatePolicy::Skip);
        if report.added > 0 {
            self.sync();
        }
        AddOutcome { added: report.added, skipped: report.skipped }
    }

    /// Add a catalog entry picked from the quick-pick panel
    pub fn add_quick_pick(&mut self, name: &str) -> AddOutcome {
        self.add(name.lines().next().unwrap_or_default())
    }

    /// Merge the items of a share token; duplicates follow the configured policy
    pub fn import_shared(&mut self, token: &str) -> MergeReport {
        let mut incoming = codec::decode(token);
        if self.options.categorize {
            for item in &mut incoming {
                item.category = Some(crate::category::categorize(&item.name).to_string());
            }
        }
        let report = ordering::merge_items(&mut self.items, incoming, self.options.shared_duplicates);
        if report.added > 0 || report.marked > 0 {
            self.sync();
        }
        report
    }

    /// Flip the purchased flag; false when no item has `id`
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            log::debug!("toggle: no item {}", id);
            return false;
        };
        let purchased = !item.purchased;
        ordering::mark_purchased(item, purchased);
        self.sync();
        true
    }

    /// Remove the item; false when no item has `id`
    pub fn delete(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        if self.items.len() == before {
            return false;
        }
        self.sync();
        true
    }

    /// Remove every item. Callers confirm with the user first.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.sync();
    }

    /// Token for the active items; empty when nothing is active
    pub fn share_token(&self) -> String {
        codec::encode(&self.items)
    }

    // ========================
    // Saved Lists
    // ========================

    /// Snapshot the current items under `name`; None for a blank name
    pub fn save_list(&mut self, name: &str) -> Option<SavedList> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let saved = SavedList {
            id: ItemId::generate(),
            name: name.to_string(),
            items: self.items.clone(),
            created_at: now_millis(),
        };
        self.saved_lists.insert(0, saved.clone());
        self.persist_saved_lists();
        log::info!("saved list '{}' with {} items", saved.name, saved.items.len());
        Some(saved)
    }

    /// Replace the live items with copies of a snapshot
    pub fn load_saved_list(&mut self, id: &ItemId) -> bool {
        let Some(saved) = self.saved_lists.iter().find(|list| &list.id == id) else {
            return false;
        };
        self.items = saved
            .items
            .iter()
            .cloned()
            .map(|mut item| {
                item.id = ItemId::generate();
                item
            })
            .collect();
        self.sync();
        true
    }

    pub fn delete_saved_list(&mut self, id: &ItemId) -> bool {
        let before = self.saved_lists.len();
        self.saved_lists.retain(|list| &list.id != id);
        if self.saved_lists.len() == before {
            return false;
        }
        self.persist_saved_lists();
        true
    }

    /// True when a saved list already uses `name` (case-insensitive)
    pub fn has_saved_list_named(&self, name: &str) -> bool {
        let key = name_key(name);
        self.saved_lists.iter().any(|list| name_key(&list.name) == key)
    }

    // ========================
    // Side Effects
    // ========================

    fn sync(&mut self) {
        ordering::sort_items(&mut self.items);

        if self.options.mode.uses_storage() {
            if let Err(e) = self.persistence.save_items(&self.items) {
                log::warn!("could not store items: {}", e);
                // The URL must keep mirroring what storage holds, or the next
                // load would import it as a foreign link
                if self.options.mode.uses_url() {
                    return;
                }
            }
        }

        let token = if self.options.mode.uses_url() { codec::encode(&self.items) } else { String::new() };
        if let Err(e) = self.persistence.write_share_token(&token) {
            log::warn!("could not update share URL: {}", e);
        }
    }

    fn persist_saved_lists(&self) {
        if !self.options.mode.uses_storage() {
            return;
        }
        if let Err(e) = self.persistence.save_saved_lists(&self.saved_lists) {
            log::warn!("could not store saved lists: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::TAKEN;
    use crate::error::StoreError;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct MemoryState {
        items: Option<String>,
        saved_lists: Option<String>,
        url_token: Option<String>,
        fail_storage: bool,
        item_writes: usize,
    }

    /// In-memory backend; clones share state so tests can inspect writes
    #[derive(Clone, Default)]
    struct MemoryPersistence(Rc<RefCell<MemoryState>>);

    impl ListPersistence for MemoryPersistence {
        fn load_items(&self) -> StoreResult<Vec<Item>> {
            match &self.0.borrow().items {
                Some(json) => Ok(serde_json::from_str(json)?),
                None => Ok(Vec::new()),
            }
        }

        fn save_items(&self, items: &[Item]) -> StoreResult<()> {
            let mut state = self.0.borrow_mut();
            if state.fail_storage {
                return Err(StoreError::Storage("QuotaExceededError".into()));
            }
            state.items = Some(serde_json::to_string(items)?);
            state.item_writes += 1;
            Ok(())
        }

        fn load_saved_lists(&self) -> StoreResult<Vec<SavedList>> {
            match &self.0.borrow().saved_lists {
                Some(json) => Ok(serde_json::from_str(json)?),
                None => Ok(Vec::new()),
            }
        }

        fn save_saved_lists(&self, lists: &[SavedList]) -> StoreResult<()> {
            let mut state = self.0.borrow_mut();
            if state.fail_storage {
                return Err(StoreError::Storage("QuotaExceededError".into()));
            }
            state.saved_lists = Some(serde_json::to_string(lists)?);
            Ok(())
        }

        fn read_share_token(&self) -> Option<String> {
            self.0.borrow().url_token.clone()
        }

        fn write_share_token(&self, token: &str) -> StoreResult<()> {
            self.0.borrow_mut().url_token = (!token.is_empty()).then(|| token.to_string());
            Ok(())
        }
    }

    fn options(mode: PersistenceMode, categorize: bool) -> StoreOptions {
        StoreOptions { mode, categorize, shared_duplicates: DuplicatePolicy::MarkPurchased }
    }

    fn setup(mode: PersistenceMode) -> (ListStore<MemoryPersistence>, MemoryPersistence) {
        let backend = MemoryPersistence::default();
        let store = ListStore::new(backend.clone(), options(mode, false));
        (store, backend)
    }

    fn pairs(items: &[Item]) -> Vec<(String, u32)> {
        items.iter().map(|i| (i.name.clone(), i.quantity)).collect()
    }

    fn find<'a>(store: &'a ListStore<MemoryPersistence>, name: &str) -> &'a Item {
        store.items().iter().find(|i| i.name == name).expect("item present")
    }

    #[test]
    fn test_bulk_add_suppresses_duplicate_lines() {
        let (mut store, _) = setup(PersistenceMode::LocalStorage);
        let outcome = store.add("apple\nbanana * 3\napple");
        assert_eq!(outcome, AddOutcome { added: 2, skipped: 1 });
        assert_eq!(
            pairs(store.items()),
            vec![("apple".to_string(), 1), ("banana".to_string(), 3)]
        );
    }

    #[test]
    fn test_add_dedup_first_occurrence_wins() {
        let (mut store, _) = setup(PersistenceMode::LocalStorage);
        store.add("Milk\nmilk");
        assert_eq!(pairs(store.items()), vec![("Milk".to_string(), 1)]);
    }

    #[test]
    fn test_add_dedups_against_whole_list() {
        let (mut store, _) = setup(PersistenceMode::LocalStorage);
        store.add("Milk");
        let id = store.items()[0].id.clone();
        store.toggle(&id);

        let outcome = store.add("MILK\nbread");
        assert_eq!(outcome, AddOutcome { added: 1, skipped: 1 });
        assert_eq!(store.items().len(), 2);
    }

    #[test]
    fn test_add_all_duplicates_reports_zero() {
        let (mut store, backend) = setup(PersistenceMode::LocalStorage);
        store.add("tea");
        let writes = backend.0.borrow().item_writes;

        assert_eq!(store.add("Tea\n TEA "), AddOutcome { added: 0, skipped: 2 });
        assert_eq!(store.add("  \n\n"), AddOutcome::default());
        assert_eq!(backend.0.borrow().item_writes, writes);
    }

    #[test]
    fn test_add_persists_to_storage() {
        let (mut store, backend) = setup(PersistenceMode::LocalStorage);
        store.add("eggs * 12");
        let stored: Vec<Item> = serde_json::from_str(backend.0.borrow().items.as_deref().unwrap()).unwrap();
        assert_eq!(pairs(&stored), vec![("eggs".to_string(), 12)]);
        // local-storage mode keeps the URL clean
        assert_eq!(backend.0.borrow().url_token, None);
    }

    #[test]
    fn test_url_mode_tracks_active_items() {
        let (mut store, backend) = setup(PersistenceMode::UrlOnly);
        store.add("milk (2)\nbread");
        assert_eq!(backend.0.borrow().items, None);

        let token = backend.0.borrow().url_token.clone().unwrap();
        assert_eq!(token, store.share_token());
        let decoded = codec::decode(&token);
        assert_eq!(decoded.len(), 2);

        let bread = find(&store, "bread").id.clone();
        store.toggle(&bread);
        let token = backend.0.borrow().url_token.clone().unwrap();
        assert_eq!(pairs(&codec::decode(&token)), vec![("milk".to_string(), 2)]);

        store.clear_all();
        assert_eq!(backend.0.borrow().url_token, None);
    }

    #[test]
    fn test_toggle_moves_item_and_back() {
        let (mut store, _) = setup(PersistenceMode::LocalStorage);
        store.add("first");
        store.add("second");
        let first = find(&store, "first").id.clone();

        assert!(store.toggle(&first));
        assert_eq!(store.items().last().map(|i| i.name.as_str()), Some("first"));
        assert!(store.items().last().unwrap().purchased);

        assert!(store.toggle(&first));
        assert!(!find(&store, "first").purchased);
    }

    #[test]
    fn test_toggle_swaps_category() {
        let backend = MemoryPersistence::default();
        let mut store = ListStore::new(backend, options(PersistenceMode::LocalStorage, true));
        store.add("Cheddar cheese");
        let id = store.items()[0].id.clone();
        assert_eq!(store.items()[0].category.as_deref(), Some("dairy"));

        store.toggle(&id);
        assert_eq!(store.items()[0].category.as_deref(), Some(TAKEN));
        store.toggle(&id);
        assert_eq!(store.items()[0].category.as_deref(), Some("dairy"));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let (mut store, backend) = setup(PersistenceMode::LocalStorage);
        store.add("milk");
        let writes = backend.0.borrow().item_writes;
        let missing = ItemId::from("missing");
        assert!(!store.toggle(&missing));
        assert!(!store.delete(&missing));
        assert_eq!(backend.0.borrow().item_writes, writes);
    }

    #[test]
    fn test_delete_and_clear() {
        let (mut store, _) = setup(PersistenceMode::LocalStorage);
        store.add("a\nb\nc");
        let b = find(&store, "b").id.clone();
        assert!(store.delete(&b));
        assert_eq!(store.items().len(), 2);
        store.clear_all();
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_storage_failure_is_not_fatal() {
        let (mut store, backend) = setup(PersistenceMode::LocalStorage);
        backend.0.borrow_mut().fail_storage = true;
        assert_eq!(store.add("milk").added, 1);
        assert_eq!(store.items().len(), 1);
        assert!(store.save_list("weekly").is_some());
    }

    #[test]
    fn test_open_loads_storage_and_imports_link() {
        let backend = MemoryPersistence::default();
        let old = Item::new("Milk", 1, 10);
        backend.0.borrow_mut().items = Some(serde_json::to_string(&vec![old]).unwrap());
        let token = codec::encode(&[Item::new("milk", 4, 0), Item::new("bread", 2, 0)]);
        backend.0.borrow_mut().url_token = Some(token);

        let (store, report) = ListStore::open(backend.clone(), options(PersistenceMode::LocalStorage, false));
        let report = report.expect("token imported");
        assert_eq!(report, MergeReport { added: 1, skipped: 1, marked: 1 });
        assert!(find(&store, "Milk").purchased);
        assert_eq!(find(&store, "bread").quantity, 2);
        // imported links are stripped in local-storage mode
        assert_eq!(backend.0.borrow().url_token, None);
    }

    #[test]
    fn test_open_ignores_own_mirror() {
        let backend = MemoryPersistence::default();
        let items = vec![Item::new("rice", 1, 5)];
        backend.0.borrow_mut().items = Some(serde_json::to_string(&items).unwrap());
        backend.0.borrow_mut().url_token = Some(codec::encode(&items));

        let (store, report) = ListStore::open(backend.clone(), options(PersistenceMode::Mirrored, false));
        assert_eq!(report, None);
        assert_eq!(store.items().len(), 1);
        assert!(!store.items()[0].purchased);
        assert_eq!(backend.0.borrow().url_token, Some(store.share_token()));
    }

    #[test]
    fn test_mirror_not_advanced_when_storage_fails() {
        let backend = MemoryPersistence::default();
        let mode = options(PersistenceMode::Mirrored, false);
        let (mut store, _) = ListStore::open(backend.clone(), mode);
        store.add("milk");

        backend.0.borrow_mut().fail_storage = true;
        assert_eq!(store.add("bread").added, 1);
        let token = backend.0.borrow().url_token.clone().unwrap();
        assert_eq!(pairs(&codec::decode(&token)), vec![("milk".to_string(), 1)]);

        backend.0.borrow_mut().fail_storage = false;
        let (reopened, report) = ListStore::open(backend.clone(), mode);
        assert_eq!(report, None);
        assert_eq!(pairs(reopened.items()), vec![("milk".to_string(), 1)]);
        assert!(!find(&reopened, "milk").purchased);
    }

    #[test]
    fn test_open_url_only_reads_link() {
        let backend = MemoryPersistence::default();
        backend.0.borrow_mut().items = Some("[]".into());
        backend.0.borrow_mut().url_token = Some(codec::encode(&[Item::new("מלפפון", 5, 0)]));

        let (store, report) = ListStore::open(backend, options(PersistenceMode::UrlOnly, true));
        assert_eq!(report.map(|r| r.added), Some(1));
        assert_eq!(pairs(store.items()), vec![("מלפפון".to_string(), 5)]);
        assert_eq!(store.items()[0].category.as_deref(), Some("produce"));
    }

    #[test]
    fn test_open_with_corrupt_storage() {
        let backend = MemoryPersistence::default();
        backend.0.borrow_mut().items = Some("{not json".into());
        backend.0.borrow_mut().url_token = Some("%%%".into());
        let (store, report) = ListStore::open(backend, options(PersistenceMode::LocalStorage, false));
        assert!(store.items().is_empty());
        assert_eq!(report, Some(MergeReport::default()));
    }

    #[test]
    fn test_saved_lists() {
        let (mut store, backend) = setup(PersistenceMode::LocalStorage);
        assert_eq!(store.save_list("   "), None);

        store.add("pasta\nsauce * 2");
        let saved = store.save_list(" Weekly ").unwrap();
        assert_eq!(saved.name, "Weekly");
        assert_eq!(saved.items.len(), 2);
        assert!(store.has_saved_list_named("weekly"));
        assert!(backend.0.borrow().saved_lists.is_some());

        store.clear_all();
        assert!(store.load_saved_list(&saved.id));
        assert_eq!(pairs(store.items()), pairs(&saved.items));
        assert!(store.items().iter().all(|i| saved.items.iter().all(|s| s.id != i.id)));

        assert!(store.delete_saved_list(&saved.id));
        assert!(!store.delete_saved_list(&saved.id));
        assert!(store.saved_lists().is_empty());
    }

    #[test]
    fn test_quick_pick_uses_add_path() {
        let (mut store, _) = setup(PersistenceMode::LocalStorage);
        assert_eq!(store.add_quick_pick("banana").added, 1);
        assert_eq!(store.add_quick_pick("Banana").added, 0);
    }
}
