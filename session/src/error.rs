//! Session error types.

use kardex_core::StoreError;
use kardex_ops::OpError;
use kardex_transaction::TransactionError;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Operation error.
    #[error("operation error: {0}")]
    OpError(#[from] OpError),

    /// Transaction error.
    #[error("transaction error: {0}")]
    TransactionError(#[from] TransactionError),

    /// Store error.
    #[error("store error: {0}")]
    StoreError(#[from] StoreError),
}

impl SessionError {
    /// Numeric abort code carried by the underlying failure, if any.
    pub fn abort_code(&self) -> Option<u32> {
        match self {
            Self::OpError(e) => e.abort_code(),
            _ => None,
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
