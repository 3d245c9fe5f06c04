//! Execution context for operations.

use crate::Principal;

/// Identifies the principal a call executes as.
///
/// The host ledger's transaction context supplied both the sender and fresh
/// object identities. Here fresh identities come from the store's allocator,
/// so the context carries only the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecContext {
    sender: Principal,
}

impl ExecContext {
    /// Create a context acting as the given principal.
    pub fn new(sender: Principal) -> Self {
        Self { sender }
    }

    /// The principal this call executes as.
    pub fn sender(&self) -> Principal {
        self.sender
    }
}
