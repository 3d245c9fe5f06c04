//! Transaction error types.

use kardex_core::StoreError;
use thiserror::Error;

/// Transaction errors.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// No transaction is active.
    #[error("no transaction is active")]
    NoActiveTransaction,

    /// Storage error during a transactional mutation.
    #[error("store error: {0}")]
    StoreError(#[from] StoreError),
}

/// Result type for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;
