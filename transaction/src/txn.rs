//! Transaction wrapper applying changes with rollback support.

use kardex_core::{Nia, Principal, RecordId, RegistryId};
use kardex_store::Store;

use crate::buffer::{AcademicUndo, ContactUndo, TxnBuffer};
use crate::error::{TransactionError, TransactionResult};

/// Transaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    /// Changes are being applied and tracked.
    Active,
    /// The transaction finished and kept its changes.
    Committed,
    /// The transaction finished by undoing its changes.
    RolledBack,
}

/// A transaction over the store.
///
/// This implementation applies changes directly to the store and tracks
/// them in a buffer for potential rollback. This is appropriate for the
/// single-writer model: a transaction holds the store exclusively until it
/// commits or rolls back.
pub struct Transaction<'s> {
    store: &'s mut Store,
    state: TransactionState,
    buffer: TxnBuffer,
}

impl<'s> Transaction<'s> {
    /// Begin a new transaction over the store.
    pub fn begin(store: &'s mut Store) -> Self {
        Self {
            store,
            state: TransactionState::Active,
            buffer: TxnBuffer::new(),
        }
    }

    /// Check if the transaction is still active.
    pub fn is_active(&self) -> bool {
        self.state == TransactionState::Active
    }

    /// Get the current transaction state.
    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &Store {
        self.store
    }

    // ========== Transaction Lifecycle ==========

    /// Commit: keep the applied changes and discard the undo buffer.
    pub fn commit(&mut self) -> TransactionResult<()> {
        self.ensure_active()?;

        self.buffer.clear();
        self.state = TransactionState::Committed;

        Ok(())
    }

    /// Rollback: undo every applied change.
    pub fn rollback(&mut self) -> TransactionResult<()> {
        self.ensure_active()?;

        self.do_rollback();
        self.state = TransactionState::RolledBack;

        Ok(())
    }

    /// Actually perform the rollback.
    fn do_rollback(&mut self) {
        // Undo in reverse order: field overwrites, index insertions,
        // record creations, registry creations.
        for undo in self.buffer.academic_updates().iter().rev() {
            if let Ok(record) = self.store.record_mut(undo.record, undo.owner) {
                record.set_academic(undo.grado, undo.grupo.clone());
            }
        }

        for undo in self.buffer.contact_updates().iter().rev() {
            if let Ok(record) = self.store.record_mut(undo.record, undo.owner) {
                record.set_contact(undo.telefono_tutor, undo.email_tutor.clone());
            }
        }

        for (registry_id, nia) in self.buffer.index_inserts().iter().rev() {
            if let Ok(registry) = self.store.registry_mut(*registry_id) {
                registry.unregister(*nia);
            }
        }

        for record_id in self.buffer.created_records().iter().rev() {
            let _ = self.store.remove_record(*record_id);
        }

        // Index insertions into a created registry were already undone above,
        // so the emptiness guard passes here.
        for registry_id in self.buffer.created_registries().iter().rev() {
            let _ = self.store.destroy_registry(*registry_id);
        }

        self.buffer.clear();
    }

    // ========== Mutations ==========

    /// Create a registry within the transaction.
    pub fn create_registry(&mut self) -> TransactionResult<RegistryId> {
        self.ensure_active()?;

        let id = self.store.create_registry();
        self.buffer.track_created_registry(id);

        Ok(id)
    }

    /// Create a record within the transaction.
    pub fn create_record(
        &mut self,
        owner: Principal,
        nia: Nia,
        nombre_completo: String,
        curp: String,
        telefono_tutor: u64,
        email_tutor: String,
    ) -> TransactionResult<RecordId> {
        self.ensure_active()?;

        let id = self.store.create_record(
            owner,
            nia,
            nombre_completo,
            curp,
            telefono_tutor,
            email_tutor,
        );
        self.buffer.track_created_record(id);

        Ok(id)
    }

    /// Insert a `nia -> record` entry into a registry's index within the
    /// transaction. Fails on an unknown registry or a duplicate nia.
    pub fn register_nia(
        &mut self,
        registry_id: RegistryId,
        nia: Nia,
        record_id: RecordId,
    ) -> TransactionResult<()> {
        self.ensure_active()?;

        self.store.registry_mut(registry_id)?.register(nia, record_id)?;
        self.buffer.track_index_insert(registry_id, nia);

        Ok(())
    }

    /// Overwrite a record's contact fields within the transaction. Mutable
    /// access is granted only to the record's owner.
    pub fn update_contact(
        &mut self,
        record_id: RecordId,
        caller: Principal,
        telefono_tutor: u64,
        email_tutor: String,
    ) -> TransactionResult<()> {
        self.ensure_active()?;

        let record = self.store.record_mut(record_id, caller)?;
        let undo = ContactUndo {
            record: record_id,
            owner: record.owner(),
            telefono_tutor: record.telefono_tutor(),
            email_tutor: record.email_tutor().to_string(),
        };
        record.set_contact(telefono_tutor, email_tutor);
        self.buffer.track_contact_update(undo);

        Ok(())
    }

    /// Overwrite a record's academic fields within the transaction. Mutable
    /// access is granted only to the record's owner.
    pub fn update_academic(
        &mut self,
        record_id: RecordId,
        caller: Principal,
        grado: u8,
        grupo: String,
    ) -> TransactionResult<()> {
        self.ensure_active()?;

        let record = self.store.record_mut(record_id, caller)?;
        let undo = AcademicUndo {
            record: record_id,
            owner: record.owner(),
            grado: record.grado(),
            grupo: record.grupo().to_string(),
        };
        record.set_academic(grado, grupo);
        self.buffer.track_academic_update(undo);

        Ok(())
    }

    // ========== Internal Helpers ==========

    fn ensure_active(&self) -> TransactionResult<()> {
        if self.state != TransactionState::Active {
            return Err(TransactionError::NoActiveTransaction);
        }
        Ok(())
    }
}
