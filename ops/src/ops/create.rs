//! Registry creation - the once-per-institution setup step.

use kardex_core::{ExecContext, RegistryId};
use kardex_transaction::Transaction;

use crate::error::OpResult;

/// Execute registry creation. Returns the id of a new registry with an
/// empty index, available for shared access by any subsequent caller.
///
/// The registry is shared rather than owned, so the caller identity plays
/// no part beyond having initiated the call.
pub fn execute_create_registry(
    txn: &mut Transaction<'_>,
    _ctx: &ExecContext,
) -> OpResult<RegistryId> {
    let id = txn.create_registry()?;
    Ok(id)
}
