//! Undo buffer for tracking applied changes.

use kardex_core::{Nia, Principal, RecordId, RegistryId};

/// Prior contact fields of a record, captured before an overwrite.
#[derive(Debug, Clone)]
pub struct ContactUndo {
    /// The record that was overwritten.
    pub record: RecordId,
    /// The record's owner. Rollback takes mutable access through the same
    /// gate the forward write did.
    pub owner: Principal,
    /// Phone value to restore.
    pub telefono_tutor: u64,
    /// Email value to restore.
    pub email_tutor: String,
}

/// Prior academic fields of a record, captured before an overwrite.
#[derive(Debug, Clone)]
pub struct AcademicUndo {
    /// The record that was overwritten.
    pub record: RecordId,
    /// The record's owner.
    pub owner: Principal,
    /// Grade value to restore.
    pub grado: u8,
    /// Group value to restore.
    pub grupo: String,
}

/// Undo buffer tracking the changes applied by one transaction.
///
/// Changes hit the store immediately; the buffer records what is needed to
/// reverse each of them.
#[derive(Debug, Clone, Default)]
pub struct TxnBuffer {
    /// Registries created in this transaction.
    created_registries: Vec<RegistryId>,
    /// Records created in this transaction.
    created_records: Vec<RecordId>,
    /// Index insertions performed in this transaction.
    index_inserts: Vec<(RegistryId, Nia)>,
    /// Contact overwrites with their prior values.
    contact_updates: Vec<ContactUndo>,
    /// Academic overwrites with their prior values.
    academic_updates: Vec<AcademicUndo>,
}

impl TxnBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a registry created in this transaction.
    pub fn track_created_registry(&mut self, id: RegistryId) {
        self.created_registries.push(id);
    }

    /// Track a record created in this transaction.
    pub fn track_created_record(&mut self, id: RecordId) {
        self.created_records.push(id);
    }

    /// Track an index insertion performed in this transaction.
    pub fn track_index_insert(&mut self, registry: RegistryId, nia: Nia) {
        self.index_inserts.push((registry, nia));
    }

    /// Track a contact overwrite with its prior values.
    pub fn track_contact_update(&mut self, undo: ContactUndo) {
        self.contact_updates.push(undo);
    }

    /// Track an academic overwrite with its prior values.
    pub fn track_academic_update(&mut self, undo: AcademicUndo) {
        self.academic_updates.push(undo);
    }

    /// Registries created in this transaction, in application order.
    pub fn created_registries(&self) -> &[RegistryId] {
        &self.created_registries
    }

    /// Records created in this transaction, in application order.
    pub fn created_records(&self) -> &[RecordId] {
        &self.created_records
    }

    /// Index insertions performed in this transaction, in application order.
    pub fn index_inserts(&self) -> &[(RegistryId, Nia)] {
        &self.index_inserts
    }

    /// Contact overwrites, in application order.
    pub fn contact_updates(&self) -> &[ContactUndo] {
        &self.contact_updates
    }

    /// Academic overwrites, in application order.
    pub fn academic_updates(&self) -> &[AcademicUndo] {
        &self.academic_updates
    }

    /// Check if the buffer tracks no changes.
    pub fn is_empty(&self) -> bool {
        self.created_registries.is_empty()
            && self.created_records.is_empty()
            && self.index_inserts.is_empty()
            && self.contact_updates.is_empty()
            && self.academic_updates.is_empty()
    }

    /// Discard all tracked changes.
    pub fn clear(&mut self) {
        self.created_registries.clear();
        self.created_records.clear();
        self.index_inserts.clear();
        self.contact_updates.clear();
        self.academic_updates.clear();
    }
}
