//! Operation error types.

use kardex_core::{RecordId, RegistryId, StoreError};
use kardex_transaction::TransactionError;
use thiserror::Error;

/// Result type for record-keeping operations.
pub type OpResult<T> = Result<T, OpError>;

/// Errors that can occur during operation execution.
#[derive(Debug, Error)]
pub enum OpError {
    /// Storage failure: unknown ids, ownership, duplicate nia.
    #[error("Store error: {0}")]
    StoreError(StoreError),

    /// Transaction machinery misuse.
    #[error("Transaction error: {0}")]
    TransactionError(TransactionError),

    /// Grade assignment against a registry that does not list the record
    /// under its nia.
    #[error("Record {record} is not registered in registry {registry}")]
    NotRegistered {
        registry: RegistryId,
        record: RecordId,
    },
}

impl OpError {
    pub fn not_registered(registry: RegistryId, record: RecordId) -> Self {
        Self::NotRegistered { registry, record }
    }

    /// Numeric abort code carried over from the original module. The
    /// registration assertion aborts with code 0; no other failure has a
    /// code.
    pub fn abort_code(&self) -> Option<u32> {
        match self {
            Self::NotRegistered { .. } => Some(0),
            _ => None,
        }
    }
}

impl From<StoreError> for OpError {
    fn from(e: StoreError) -> Self {
        Self::StoreError(e)
    }
}

impl From<TransactionError> for OpError {
    fn from(e: TransactionError) -> Self {
        // Store failures surface the same way no matter which layer they
        // crossed on the way up.
        match e {
            TransactionError::StoreError(store) => Self::StoreError(store),
            other => Self::TransactionError(other),
        }
    }
}
