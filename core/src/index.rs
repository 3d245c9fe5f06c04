//! The nia index: unique-key mapping from nia to record identifier.

use crate::{Nia, RecordId, StoreError, StoreResult};
use std::collections::HashMap;

/// Unique-key mapping `Nia -> RecordId`.
///
/// This replaces the host ledger's table primitive: inserting a key that is
/// already present is rejected and leaves the index unchanged. No ordering is
/// guaranteed and no operation iterates the index.
#[derive(Debug, Default)]
pub struct NiaIndex {
    entries: HashMap<Nia, RecordId>,
}

impl NiaIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entry. Fails with `DuplicateNia` if the key exists.
    pub fn insert(&mut self, nia: Nia, record: RecordId) -> StoreResult<()> {
        if self.entries.contains_key(&nia) {
            return Err(StoreError::DuplicateNia { nia });
        }
        self.entries.insert(nia, record);
        Ok(())
    }

    /// Remove an entry, returning the record id it mapped to.
    pub fn remove(&mut self, nia: Nia) -> Option<RecordId> {
        self.entries.remove(&nia)
    }

    /// Look up the record id registered under a nia.
    pub fn get(&self, nia: Nia) -> Option<RecordId> {
        self.entries.get(&nia).copied()
    }

    /// Check whether a nia is present as a key.
    pub fn contains(&self, nia: Nia) -> bool {
        self.entries.contains_key(&nia)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
