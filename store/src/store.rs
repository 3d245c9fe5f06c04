//! Core object store implementation.

use kardex_core::{
    Nia, Principal, RecordId, Registry, RegistryId, StoreError, StoreResult, StudentRecord,
};
use std::collections::HashMap;

/// ID allocator for registries and records.
#[derive(Debug, Default)]
struct IdAllocator {
    next_registry_id: u64,
    next_record_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self {
            next_registry_id: 1,
            next_record_id: 1,
        }
    }

    fn alloc_registry_id(&mut self) -> RegistryId {
        let id = RegistryId::new(self.next_registry_id);
        self.next_registry_id += 1;
        id
    }

    fn alloc_record_id(&mut self) -> RecordId {
        let id = RecordId::new(self.next_record_id);
        self.next_record_id += 1;
        id
    }
}

/// The in-memory object store.
///
/// Registries are shared: any caller holding an id may read or mutate one.
/// Records are owned: mutable access is granted only to the principal
/// recorded as the owner at creation. `&mut self` exclusivity serializes
/// all access.
#[derive(Debug)]
pub struct Store {
    /// Registry storage
    registries: HashMap<RegistryId, Registry>,
    /// Record storage
    records: HashMap<RecordId, StudentRecord>,
    /// ID allocator
    id_alloc: IdAllocator,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            registries: HashMap::new(),
            records: HashMap::new(),
            id_alloc: IdAllocator::new(),
        }
    }

    // ==================== Registry Operations ====================

    /// Create a new registry with an empty index.
    pub fn create_registry(&mut self) -> RegistryId {
        let id = self.id_alloc.alloc_registry_id();
        self.registries.insert(id, Registry::new(id));
        id
    }

    /// Get a registry by ID.
    pub fn registry(&self, id: RegistryId) -> StoreResult<&Registry> {
        self.registries
            .get(&id)
            .ok_or(StoreError::RegistryNotFound(id))
    }

    /// Get a mutable reference to a registry by ID. Registries are shared;
    /// no caller check applies.
    pub fn registry_mut(&mut self, id: RegistryId) -> StoreResult<&mut Registry> {
        self.registries
            .get_mut(&id)
            .ok_or(StoreError::RegistryNotFound(id))
    }

    /// Remove a registry. Refused while any student is still enrolled.
    pub fn destroy_registry(&mut self, id: RegistryId) -> StoreResult<()> {
        let registry = self
            .registries
            .get(&id)
            .ok_or(StoreError::RegistryNotFound(id))?;
        if !registry.is_empty() {
            return Err(StoreError::RegistryNotEmpty(id));
        }

        self.registries.remove(&id);
        Ok(())
    }

    // ==================== Record Operations ====================

    /// Create a new record owned by `owner`, with default academic fields.
    pub fn create_record(
        &mut self,
        owner: Principal,
        nia: Nia,
        nombre_completo: String,
        curp: String,
        telefono_tutor: u64,
        email_tutor: String,
    ) -> RecordId {
        let id = self.id_alloc.alloc_record_id();
        let record = StudentRecord::new(
            id,
            owner,
            nia,
            nombre_completo,
            curp,
            telefono_tutor,
            email_tutor,
        );

        self.records.insert(id, record);
        id
    }

    /// Get a record by ID. Reads are not gated on ownership.
    pub fn record(&self, id: RecordId) -> StoreResult<&StudentRecord> {
        self.records.get(&id).ok_or(StoreError::RecordNotFound(id))
    }

    /// Get a mutable reference to a record. Granted only to the owner.
    pub fn record_mut(
        &mut self,
        id: RecordId,
        caller: Principal,
    ) -> StoreResult<&mut StudentRecord> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(StoreError::RecordNotFound(id))?;
        if record.owner() != caller {
            return Err(StoreError::NotOwner {
                record: id,
                principal: caller,
            });
        }

        Ok(record)
    }

    /// Remove a record from the store, returning it.
    pub fn remove_record(&mut self, id: RecordId) -> StoreResult<StudentRecord> {
        self.records
            .remove(&id)
            .ok_or(StoreError::RecordNotFound(id))
    }

    // ==================== Statistics ====================

    /// Get the number of live registries.
    pub fn registry_count(&self) -> usize {
        self.registries.len()
    }

    /// Get the number of live records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Get all record IDs.
    pub fn all_record_ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.keys().copied()
    }
}
