//! Basic-fields read - the identity lookup used by school staff.

use kardex_core::{Nia, RecordId};
use kardex_store::Store;

use crate::error::OpResult;

/// Execute the basic-fields read: the (`nia`, full name, CURP) triple of a
/// record. Pure read, open to any caller; the only failure is an unknown
/// record id.
pub fn execute_read_basic_fields(
    store: &Store,
    record_id: RecordId,
) -> OpResult<(Nia, String, String)> {
    let record = store.record(record_id)?;
    let (nia, nombre_completo, curp) = record.basic_fields();

    Ok((nia, nombre_completo.to_string(), curp.to_string()))
}
