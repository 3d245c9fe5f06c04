//! Contact update - guardian-side overwrite of phone and email.

use kardex_core::{ExecContext, RecordId};
use kardex_transaction::Transaction;

use crate::error::OpResult;

/// Execute a contact update: overwrite `telefono_tutor` and `email_tutor`
/// unconditionally. Values are stored verbatim, without format validation.
/// Mutable access to the record is granted only to its owner.
pub fn execute_update_contact(
    txn: &mut Transaction<'_>,
    record_id: RecordId,
    telefono_tutor: u64,
    email_tutor: String,
    ctx: &ExecContext,
) -> OpResult<()> {
    txn.update_contact(record_id, ctx.sender(), telefono_tutor, email_tutor)?;
    Ok(())
}
