//! Kardex Object Store
//!
//! This crate provides the in-memory object space the record-keeping
//! operations run against:
//! - Registry and record storage with allocator-assigned ids
//! - Shared access to registries, owner-gated mutable access to records
//! - Object lifecycle (creation, removal, registry teardown)

mod store;

pub use store::*;
