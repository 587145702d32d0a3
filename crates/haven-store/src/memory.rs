//! In-memory store implementation.
//!
//! Provides a BTreeMap-based store. There is no external persistence; the
//! ordered pair list from [`StoreBackend::entries`] is the serialized form
//! a host may write out after each mutating call.

use core::cell::RefCell;
use std::collections::BTreeMap;

use crate::backend::StoreBackend;

/// In-memory flat store.
#[derive(Default)]
pub struct MemoryStore {
    /// Record storage (key -> serialized value)
    records: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        self.records
            .borrow_mut()
            .insert(String::from(key), String::from(value));
    }

    fn remove(&self, key: &str) -> bool {
        self.records.borrow_mut().remove(key).is_some()
    }

    fn exists(&self, key: &str) -> bool {
        self.records.borrow().contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        self.records.borrow().keys().cloned().collect()
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.records
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn load(&self, pairs: Vec<(String, String)>) {
        let mut records = self.records.borrow_mut();
        records.clear();
        for (key, value) in pairs {
            records.insert(key, value);
        }
        tracing::debug!(count = records.len(), "store loaded from pair list");
    }

    fn clear(&self) {
        self.records.borrow_mut().clear();
    }

    fn len(&self) -> usize {
        self.records.borrow().len()
    }
}
