//! Grade assignment - school-side overwrite of grade and group.

use kardex_core::{ExecContext, RecordId, RegistryId};
use kardex_transaction::Transaction;

use crate::error::{OpError, OpResult};

/// Execute a grade assignment: overwrite `grado` and `grupo`, provided the
/// given registry's index registers this very record under its nia.
///
/// The registration check compares record identity, not mere key presence:
/// a registry that lists the same nia for a different record does not
/// qualify. An unregistered record is the module's one assertion failure
/// and carries abort code 0.
///
/// The ownership gate runs before the registration assertion, the same
/// order the two checks apply to a contact update. The assertion is
/// checked after the overwrite; when it fails, the enclosing transaction
/// unwinds the overwrite, so a rejected assignment changes nothing.
pub fn execute_assign_grade_group(
    txn: &mut Transaction<'_>,
    registry_id: RegistryId,
    record_id: RecordId,
    grado: u8,
    grupo: String,
    ctx: &ExecContext,
) -> OpResult<()> {
    let nia = txn.store().record(record_id)?.nia();

    txn.update_academic(record_id, ctx.sender(), grado, grupo)?;

    let registry = txn.store().registry(registry_id)?;
    if !registry.is_registered(nia, record_id) {
        return Err(OpError::not_registered(registry_id, record_id));
    }

    Ok(())
}
