//! Vote Store
//!
//! Per-item favorite state for one browser profile. Loaded from storage
//! once per page, written back after every toggle.

use std::collections::BTreeMap;

use crate::error::VoteError;
use crate::models::{CatalogItem, VoteRecord};
use crate::storage::KeyValueStorage;

/// Emitted after a record changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteChange {
    pub item_id: String,
    pub previous: VoteRecord,
    pub record: VoteRecord,
}

type Observer = Box<dyn Fn(&VoteChange)>;

/// Mapping item id -> vote record, covering exactly the catalog
pub struct VoteStore {
    storage: Box<dyn KeyValueStorage>,
    key: String,
    records: BTreeMap<String, VoteRecord>,
    observers: Vec<Observer>,
}

impl VoteStore {
    /// Load persisted votes, filling in defaults for missing catalog items.
    ///
    /// Missing, unreadable or malformed data counts as no data.
    pub fn load(storage: Box<dyn KeyValueStorage>, key: impl Into<String>, catalog: &[CatalogItem]) -> Self {
        let key = key.into();
        let mut records = read_persisted(storage.as_ref(), &key);

        let before = records.len();
        records.retain(|id, _| catalog.iter().any(|item| item.id == id));
        if records.len() < before {
            log::debug!("Dropped {} records for items not in the catalog", before - records.len());
        }

        for item in catalog {
            records.entry(item.id.to_string()).or_default();
        }
        log::info!("Loaded {} vote records from '{}'", records.len(), key);

        Self {
            storage,
            key,
            records,
            observers: Vec::new(),
        }
    }

    pub fn record(&self, item_id: &str) -> Option<&VoteRecord> {
        self.records.get(item_id)
    }

    pub fn records(&self) -> &BTreeMap<String, VoteRecord> {
        &self.records
    }

    /// Register an observer called after every successful toggle
    pub fn subscribe(&mut self, observer: impl Fn(&VoteChange) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Favorite or un-favorite an item, then notify and persist.
    ///
    /// A failed storage write is logged; the in-memory change stands.
    pub fn toggle_up(&mut self, item_id: &str) -> Result<VoteChange, VoteError> {
        let record = self
            .records
            .get_mut(item_id)
            .ok_or_else(|| VoteError::UnknownItem(item_id.to_string()))?;

        let previous = *record;
        *record = previous.toggled_up();
        let change = VoteChange {
            item_id: item_id.to_string(),
            previous,
            record: *record,
        };
        log::debug!("{}: score {} -> {}", change.item_id, change.previous.score, change.record.score);

        for observer in &self.observers {
            observer(&change);
        }
        self.persist();

        Ok(change)
    }

    /// Serialized mapping, as written to storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }

    fn persist(&self) {
        let payload = match self.to_json() {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Failed to serialize votes: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &payload) {
            log::warn!("Votes not persisted: {}", e);
        }
    }
}

fn read_persisted(storage: &dyn KeyValueStorage, key: &str) -> BTreeMap<String, VoteRecord> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return BTreeMap::new(),
        Err(e) => {
            log::warn!("Ignoring stored votes: {}", e);
            return BTreeMap::new();
        }
    };

    // `null` is what JSON.stringify leaves behind for an unset mapping
    let entries = match serde_json::from_str::<Option<BTreeMap<String, serde_json::Value>>>(&raw) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(e) => {
            log::warn!("Discarding malformed votes under '{}': {}", key, e);
            return BTreeMap::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|(id, value)| match serde_json::from_value::<VoteRecord>(value) {
            Ok(record) => Some((id, record)),
            Err(e) => {
                log::warn!("Skipping stored vote for '{}': {}", id, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DONUTS;
    use crate::error::StorageError;
    use crate::models::UserVote;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    const KEY: &str = "dankyDonutVotes";

    fn load_from(storage: &MemoryStorage) -> VoteStore {
        VoteStore::load(Box::new(storage.clone()), KEY, DONUTS)
    }

    fn up(score: i64) -> VoteRecord {
        VoteRecord { score, user_vote: Some(UserVote::Up) }
    }

    fn none(score: i64) -> VoteRecord {
        VoteRecord { score, user_vote: None }
    }

    /// Reads fine, refuses every write
    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            })
        }
    }

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                message: "SecurityError".to_string(),
            })
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_storage_defaults_every_item() {
        let store = load_from(&MemoryStorage::new());

        assert_eq!(store.records().len(), DONUTS.len());
        for item in DONUTS {
            assert_eq!(store.record(item.id), Some(&VoteRecord::default()));
        }
    }

    #[test]
    fn test_toggle_first_favorite() {
        let storage = MemoryStorage::new();
        let mut store = load_from(&storage);

        store.toggle_up("d1").unwrap();

        assert_eq!(store.record("d1"), Some(&up(1)));
        for item in DONUTS.iter().filter(|d| d.id != "d1") {
            assert_eq!(store.record(item.id), Some(&none(0)));
        }
    }

    #[test]
    fn test_toggle_twice_restores_record() {
        let storage = MemoryStorage::with_entry(KEY, r#"{"d3":{"score":4,"userVote":null}}"#);
        let mut store = load_from(&storage);

        store.toggle_up("d3").unwrap();
        store.toggle_up("d3").unwrap();

        assert_eq!(store.record("d3"), Some(&none(4)));
    }

    #[test]
    fn test_unfavorite_after_reload() {
        let storage = MemoryStorage::with_entry(KEY, r#"{"d1":{"score":1,"userVote":"up"}}"#);
        let mut store = load_from(&storage);
        assert_eq!(store.record("d1"), Some(&up(1)));

        store.toggle_up("d1").unwrap();

        assert_eq!(store.record("d1"), Some(&none(0)));
    }

    #[test]
    fn test_malformed_payload_falls_back_to_defaults() {
        let storage = MemoryStorage::with_entry(KEY, "not json at all");
        let store = load_from(&storage);

        for item in DONUTS {
            assert_eq!(store.record(item.id), Some(&VoteRecord::default()));
        }
    }

    #[test]
    fn test_null_and_wrong_shape_payloads() {
        for payload in ["null", "[1,2,3]", r#"{"d1":"up"}"#] {
            let store = load_from(&MemoryStorage::with_entry(KEY, payload));
            assert_eq!(store.record("d1"), Some(&VoteRecord::default()), "payload {}", payload);
        }
    }

    #[test]
    fn test_unreadable_storage_falls_back_to_defaults() {
        let store = VoteStore::load(Box::new(BrokenStorage), KEY, DONUTS);
        assert_eq!(store.records().len(), DONUTS.len());
    }

    #[test]
    fn test_legacy_down_vote_adds_two() {
        let storage = MemoryStorage::with_entry(KEY, r#"{"d2":{"score":5,"userVote":"down"}}"#);
        let mut store = load_from(&storage);

        let change = store.toggle_up("d2").unwrap();

        assert_eq!(change.previous, VoteRecord { score: 5, user_vote: Some(UserVote::Down) });
        assert_eq!(store.record("d2"), Some(&up(7)));
    }

    #[test]
    fn test_round_trip_through_storage() {
        let storage = MemoryStorage::new();
        let mut store = load_from(&storage);
        store.toggle_up("d4").unwrap();
        store.toggle_up("d9").unwrap();
        store.toggle_up("d9").unwrap();

        let json = store.to_json().unwrap();
        let reloaded = load_from(&MemoryStorage::with_entry(KEY, &json));

        assert_eq!(reloaded.records(), store.records());
    }

    #[test]
    fn test_every_toggle_is_persisted() {
        let storage = MemoryStorage::new();
        let mut store = load_from(&storage);

        store.toggle_up("d5").unwrap();
        let saved = storage.get(KEY).unwrap().expect("votes written");
        assert!(saved.contains(r#""d5":{"score":1,"userVote":"up"}"#));

        store.toggle_up("d5").unwrap();
        let saved = storage.get(KEY).unwrap().expect("votes written");
        assert!(saved.contains(r#""d5":{"score":0,"userVote":null}"#));
    }

    #[test]
    fn test_unknown_ids_are_dropped_on_load() {
        let storage = MemoryStorage::with_entry(
            KEY,
            r#"{"d1":{"score":2,"userVote":null},"retired":{"score":9,"userVote":"up"}}"#,
        );
        let store = load_from(&storage);

        assert_eq!(store.record("retired"), None);
        assert_eq!(store.record("d1"), Some(&none(2)));
        assert_eq!(store.records().len(), DONUTS.len());
    }

    #[test]
    fn test_toggle_unknown_item_is_rejected() {
        let storage = MemoryStorage::new();
        let mut store = load_from(&storage);

        let err = store.toggle_up("d42").unwrap_err();

        assert_eq!(err, VoteError::UnknownItem("d42".to_string()));
        assert_eq!(storage.get(KEY).unwrap(), None);
    }

    #[test]
    fn test_observers_receive_changes() {
        let mut store = load_from(&MemoryStorage::new());
        let seen: Rc<RefCell<Vec<VoteChange>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |change| sink.borrow_mut().push(change.clone()));

        store.toggle_up("d6").unwrap();
        let _ = store.toggle_up("nope");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].item_id, "d6");
        assert_eq!(seen[0].previous, none(0));
        assert_eq!(seen[0].record, up(1));
    }

    #[test]
    fn test_bad_entry_keeps_other_votes() {
        let storage = MemoryStorage::with_entry(
            KEY,
            r#"{"d1":{"score":3,"userVote":"up"},"legacyBanner":true,"d2":{"score":"lots"}}"#,
        );
        let store = load_from(&storage);

        assert_eq!(store.record("d1"), Some(&up(3)));
        assert_eq!(store.record("d2"), Some(&VoteRecord::default()));
        assert_eq!(store.record("legacyBanner"), None);
        assert_eq!(store.records().len(), DONUTS.len());
    }

    #[test]
    fn test_toggle_at_score_limits() {
        let storage = MemoryStorage::with_entry(
            KEY,
            r#"{"d1":{"score":9223372036854775807,"userVote":null},"d2":{"score":-9223372036854775808,"userVote":"up"}}"#,
        );
        let mut store = load_from(&storage);

        assert_eq!(store.toggle_up("d1").unwrap().record, up(i64::MAX));
        assert_eq!(store.toggle_up("d2").unwrap().record, none(i64::MIN));
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let mut store = VoteStore::load(Box::new(ReadOnlyStorage), KEY, DONUTS);

        let change = store.toggle_up("d7").unwrap();

        assert_eq!(change.record, up(1));
        assert_eq!(store.record("d7"), Some(&up(1)));
    }
}
