//! Common error types for kardex.

use crate::{Nia, Principal, RecordId, RegistryId};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Registry not found.
    #[error("Registry not found: {0}")]
    RegistryNotFound(RegistryId),

    /// Record not found.
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    /// Caller does not own the record it wants to mutate.
    #[error("Principal {principal} does not own record {record}")]
    NotOwner {
        record: RecordId,
        principal: Principal,
    },

    /// The nia is already a key in the registry's index.
    #[error("Nia {nia} is already enrolled in this registry")]
    DuplicateNia { nia: Nia },

    /// Registry teardown requires an empty index.
    #[error("Cannot destroy registry {0}: index is not empty")]
    RegistryNotEmpty(RegistryId),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
