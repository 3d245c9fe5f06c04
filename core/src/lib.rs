//! Kardex Core Types
//!
//! This crate provides the foundational types used throughout the kardex
//! stack:
//! - Identity newtypes (RegistryId, RecordId, Nia, Principal)
//! - The execution context a caller acts through
//! - Entity structures (Registry, StudentRecord) and the nia index
//! - Common error types

mod context;
mod entity;
mod error;
mod id;
mod index;

pub use context::*;
pub use entity::*;
pub use error::*;
pub use id::*;
pub use index::*;
