//! Kardex Transactions
//!
//! This crate provides op-scoped atomicity over the store:
//! - Mutations apply to the store immediately and are tracked in an undo buffer
//! - Rollback reverses them, most recently applied category first
//! - Commit discards the undo buffer
//!
//! One mutating operation runs inside exactly one transaction.

mod buffer;
mod error;
mod txn;

pub use buffer::*;
pub use error::*;
pub use txn::*;
