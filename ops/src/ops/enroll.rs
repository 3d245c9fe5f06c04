//! Enrollment - creates an owned student record and registers its nia.

use kardex_core::{ExecContext, Nia, RecordId, RegistryId};
use kardex_transaction::Transaction;

use crate::error::OpResult;

/// Execute an enrollment: construct the student's record, owned by the
/// calling guardian and with default academic fields, then insert
/// `nia -> record id` into the registry's index.
///
/// The record is created first. A duplicate nia (or an unknown registry)
/// then fails the registration step, and the enclosing transaction removes
/// the record again, so a failed enrollment leaves nothing behind.
#[allow(clippy::too_many_arguments)]
pub fn execute_enroll_student(
    txn: &mut Transaction<'_>,
    registry_id: RegistryId,
    nia: Nia,
    nombre_completo: String,
    curp: String,
    telefono_tutor: u64,
    email_tutor: String,
    ctx: &ExecContext,
) -> OpResult<RecordId> {
    let record_id = txn.create_record(
        ctx.sender(),
        nia,
        nombre_completo,
        curp,
        telefono_tutor,
        email_tutor,
    )?;

    txn.register_nia(registry_id, nia, record_id)?;

    Ok(record_id)
}
