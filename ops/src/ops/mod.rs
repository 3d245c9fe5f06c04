//! Operation implementations.
//!
//! Each record-keeping operation is implemented in its own module.

mod academic;
mod contact;
mod create;
mod enroll;
mod read;

pub use academic::execute_assign_grade_group;
pub use contact::execute_update_contact;
pub use create::execute_create_registry;
pub use enroll::execute_enroll_student;
pub use read::execute_read_basic_fields;
