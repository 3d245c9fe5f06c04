//! Session manager.

use kardex_core::{ExecContext, Nia, RecordId, RegistryId};
use kardex_ops::{self as ops, OpResult};
use kardex_store::Store;
use kardex_transaction::Transaction;
use tracing::{debug, info, warn};

use crate::error::SessionResult;

/// Session ID type.
pub type SessionId = u64;

/// A kardex session.
///
/// The session owns the object store and is the single writer to it. Every
/// mutating operation runs inside one transaction; an error rolls the
/// transaction back before it surfaces to the caller.
pub struct Session {
    /// Unique session ID.
    id: SessionId,
    /// The object store this session operates on.
    store: Store,
}

impl Session {
    /// Create a new session over an empty store.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            store: Store::new(),
        }
    }

    /// Create a session over an existing store.
    pub fn with_store(id: SessionId, store: Store) -> Self {
        Self { id, store }
    }

    /// Get the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    // ==================== Operations ====================

    /// Create a new shared registry with an empty index.
    pub fn create_registry(&mut self, ctx: &ExecContext) -> SessionResult<RegistryId> {
        debug!(session = self.id, sender = %ctx.sender(), "create_registry");

        let registry_id = self.run_in_txn("create_registry", |txn| {
            ops::execute_create_registry(txn, ctx)
        })?;

        info!(session = self.id, registry = %registry_id, "registry created");
        Ok(registry_id)
    }

    /// Enroll a student: create an owned record and register its nia in the
    /// registry's index. Returns the new record's id. Fails on an unknown
    /// registry or a duplicate nia, leaving no partial state.
    #[allow(clippy::too_many_arguments)]
    pub fn enroll_student(
        &mut self,
        registry_id: RegistryId,
        nia: Nia,
        nombre_completo: String,
        curp: String,
        telefono_tutor: u64,
        email_tutor: String,
        ctx: &ExecContext,
    ) -> SessionResult<RecordId> {
        debug!(
            session = self.id,
            registry = %registry_id,
            nia = %nia,
            sender = %ctx.sender(),
            "enroll_student"
        );

        let record_id = self.run_in_txn("enroll_student", |txn| {
            ops::execute_enroll_student(
                txn,
                registry_id,
                nia,
                nombre_completo,
                curp,
                telefono_tutor,
                email_tutor,
                ctx,
            )
        })?;

        info!(
            session = self.id,
            registry = %registry_id,
            record = %record_id,
            nia = %nia,
            "student enrolled"
        );
        Ok(record_id)
    }

    /// Read a record's (`nia`, full name, CURP) triple. Open to any caller.
    pub fn read_basic_fields(&self, record_id: RecordId) -> SessionResult<(Nia, String, String)> {
        debug!(session = self.id, record = %record_id, "read_basic_fields");

        let fields = ops::execute_read_basic_fields(&self.store, record_id)?;

        info!(session = self.id, record = %record_id, nia = %fields.0, "basic fields read");
        Ok(fields)
    }

    /// Overwrite a record's guardian contact fields. Owner-only.
    pub fn update_contact(
        &mut self,
        record_id: RecordId,
        telefono_tutor: u64,
        email_tutor: String,
        ctx: &ExecContext,
    ) -> SessionResult<()> {
        debug!(
            session = self.id,
            record = %record_id,
            sender = %ctx.sender(),
            "update_contact"
        );

        self.run_in_txn("update_contact", |txn| {
            ops::execute_update_contact(txn, record_id, telefono_tutor, email_tutor, ctx)
        })?;

        info!(session = self.id, record = %record_id, "contact updated");
        Ok(())
    }

    /// Overwrite a record's academic fields, provided the registry lists
    /// the record under its nia. Owner-only.
    pub fn assign_grade_group(
        &mut self,
        registry_id: RegistryId,
        record_id: RecordId,
        grado: u8,
        grupo: String,
        ctx: &ExecContext,
    ) -> SessionResult<()> {
        debug!(
            session = self.id,
            registry = %registry_id,
            record = %record_id,
            grado,
            grupo = %grupo,
            sender = %ctx.sender(),
            "assign_grade_group"
        );

        self.run_in_txn("assign_grade_group", |txn| {
            ops::execute_assign_grade_group(txn, registry_id, record_id, grado, grupo, ctx)
        })?;

        info!(session = self.id, record = %record_id, "grade assigned");
        Ok(())
    }

    /// Remove an empty registry from the store. Test/teardown facility; a
    /// single store primitive, so no transaction wraps it.
    pub fn destroy_registry(&mut self, registry_id: RegistryId) -> SessionResult<()> {
        debug!(session = self.id, registry = %registry_id, "destroy_registry");

        self.store.destroy_registry(registry_id)?;

        info!(session = self.id, registry = %registry_id, "registry destroyed");
        Ok(())
    }

    // ==================== Internal Helpers ====================

    /// Run one operation inside its own transaction: commit on success,
    /// rollback on error.
    fn run_in_txn<T, F>(&mut self, op: &'static str, f: F) -> SessionResult<T>
    where
        F: FnOnce(&mut Transaction<'_>) -> OpResult<T>,
    {
        let mut txn = Transaction::begin(&mut self.store);
        match f(&mut txn) {
            Ok(value) => {
                txn.commit()?;
                Ok(value)
            }
            Err(e) => {
                txn.rollback()?;
                warn!(session = self.id, op = op, err = %e, "operation rolled back");
                Err(e.into())
            }
        }
    }
}

/// Session manager for handling multiple sessions.
#[derive(Default)]
pub struct SessionManager {
    /// Next session ID to assign.
    next_id: SessionId,
}

impl SessionManager {
    /// Create a new session manager.
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Allocate a new session ID.
    pub fn alloc_id(&mut self) -> SessionId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create a new session over an empty store.
    pub fn create_session(&mut self) -> Session {
        let id = self.alloc_id();
        Session::new(id)
    }
}
