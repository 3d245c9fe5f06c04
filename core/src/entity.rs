//! Entity structures for kardex.
//!
//! A Registry is the shared per-institution index; a StudentRecord is the
//! individually owned per-student data object. Fields are private: nia is
//! immutable after creation and the index rejects duplicate keys, and
//! neither invariant can be broken from outside.

use crate::{Nia, NiaIndex, Principal, RecordId, RegistryId, StoreResult};

/// Group label every record starts with, before any assignment call.
pub const DEFAULT_GRUPO: &str = "unassigned";

/// The shared per-institution student index.
#[derive(Debug)]
pub struct Registry {
    /// Unique identifier for this registry.
    id: RegistryId,
    /// Mapping nia -> record id, the registry's sole structured field.
    index: NiaIndex,
}

impl Registry {
    /// Create a registry with an empty index.
    pub fn new(id: RegistryId) -> Self {
        Self {
            id,
            index: NiaIndex::new(),
        }
    }

    /// This registry's identifier.
    pub fn id(&self) -> RegistryId {
        self.id
    }

    /// Register a record id under a nia. Fails with `DuplicateNia` if the
    /// nia is already a key.
    pub fn register(&mut self, nia: Nia, record: RecordId) -> StoreResult<()> {
        self.index.insert(nia, record)
    }

    /// Remove a nia from the index, returning the record id it mapped to.
    pub fn unregister(&mut self, nia: Nia) -> Option<RecordId> {
        self.index.remove(nia)
    }

    /// Look up the record id registered under a nia.
    pub fn lookup(&self, nia: Nia) -> Option<RecordId> {
        self.index.get(nia)
    }

    /// Check whether a nia is present as a key.
    pub fn contains(&self, nia: Nia) -> bool {
        self.index.contains(nia)
    }

    /// Check whether this registry registers exactly this record under the
    /// given nia. Key presence alone is not enough: the entry must map to
    /// the record's own id.
    pub fn is_registered(&self, nia: Nia, record: RecordId) -> bool {
        self.index.get(nia) == Some(record)
    }

    /// Number of enrolled nias.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if no student is enrolled.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// An individually owned per-student record.
#[derive(Debug, Clone)]
pub struct StudentRecord {
    /// Unique identifier for this record.
    id: RecordId,
    /// The principal that owns this record (the enrolling guardian).
    owner: Principal,
    /// Student identifier, immutable after creation.
    nia: Nia,
    /// Full name.
    nombre_completo: String,
    /// National identifier, stored verbatim.
    curp: String,
    /// Guardian phone number.
    telefono_tutor: u64,
    /// Guardian email.
    email_tutor: String,
    /// Grade level.
    grado: u8,
    /// Group label.
    grupo: String,
}

impl StudentRecord {
    /// Create a record with the given identity fields and default academic
    /// fields (`grado` 0, `grupo` "unassigned").
    pub fn new(
        id: RecordId,
        owner: Principal,
        nia: Nia,
        nombre_completo: String,
        curp: String,
        telefono_tutor: u64,
        email_tutor: String,
    ) -> Self {
        Self {
            id,
            owner,
            nia,
            nombre_completo,
            curp,
            telefono_tutor,
            email_tutor,
            grado: 0,
            grupo: DEFAULT_GRUPO.to_string(),
        }
    }

    /// This record's identifier.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// The principal that owns this record.
    pub fn owner(&self) -> Principal {
        self.owner
    }

    /// Student identifier.
    pub fn nia(&self) -> Nia {
        self.nia
    }

    /// Full name.
    pub fn nombre_completo(&self) -> &str {
        &self.nombre_completo
    }

    /// National identifier string.
    pub fn curp(&self) -> &str {
        &self.curp
    }

    /// Guardian phone number.
    pub fn telefono_tutor(&self) -> u64 {
        self.telefono_tutor
    }

    /// Guardian email.
    pub fn email_tutor(&self) -> &str {
        &self.email_tutor
    }

    /// Grade level.
    pub fn grado(&self) -> u8 {
        self.grado
    }

    /// Group label.
    pub fn grupo(&self) -> &str {
        &self.grupo
    }

    /// The triple returned by the read-basic-fields operation.
    pub fn basic_fields(&self) -> (Nia, &str, &str) {
        (self.nia, &self.nombre_completo, &self.curp)
    }

    /// Overwrite both guardian contact fields.
    pub fn set_contact(&mut self, telefono_tutor: u64, email_tutor: String) {
        self.telefono_tutor = telefono_tutor;
        self.email_tutor = email_tutor;
    }

    /// Overwrite both academic fields.
    pub fn set_academic(&mut self, grado: u8, grupo: String) {
        self.grado = grado;
        self.grupo = grupo;
    }
}
