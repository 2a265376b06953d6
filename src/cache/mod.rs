//! In-memory result store
//!
//! The store is an injectable seam so tests can substitute their own
//! implementation and assert on its contents. Keys are the raw drug name
//! string as typed by the caller; no normalization, no eviction, no expiry.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::lookup::LookupResult;

/// Store for per-drug lookup results.
pub trait ResultStore: Send + Sync {
    /// Stored result for `drug_name`, if present
    fn get(&self, drug_name: &str) -> Option<LookupResult>;

    /// Store `result` under `drug_name`, replacing any previous entry
    fn put(&self, drug_name: &str, result: LookupResult);

    /// Whether `drug_name` has a stored result
    fn contains(&self, drug_name: &str) -> bool;

    /// Number of stored entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct CachedEntry {
    result: LookupResult,
    fetched_at: DateTime<Utc>,
}

/// Process-wide in-memory store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, CachedEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryStore {
    fn get(&self, drug_name: &str) -> Option<LookupResult> {
        let entries = self.entries.lock().ok()?;
        entries.get(drug_name).map(|entry| {
            log::debug!(
                "returning result for {drug_name:?} fetched at {}",
                entry.fetched_at
            );
            entry.result.clone()
        })
    }

    fn put(&self, drug_name: &str, result: LookupResult) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                drug_name.to_string(),
                CachedEntry {
                    result,
                    fetched_at: Utc::now(),
                },
            );
        }
    }

    fn contains(&self, drug_name: &str) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.contains_key(drug_name))
            .unwrap_or(false)
    }

    fn len(&self) -> usize {
        self.entries
            .lock()
            .map(|entries| entries.len())
            .unwrap_or(0)
    }
}
