//! Kardex Operations
//!
//! Execute the five record-keeping operations: create-registry,
//! enroll-student, read-basic-fields, update-contact, assign-grade-group.
//!
//! Responsibilities:
//! - Run each operation's checks in the order callers rely on
//! - Apply mutations through the enclosing transaction
//! - Return created ids and read results
//!
//! # Module Structure
//!
//! - `ops/` - Individual operation implementations
//! - `error` - Error types for operation failures

mod error;
mod ops;

pub use error::{OpError, OpResult};
pub use ops::*;
