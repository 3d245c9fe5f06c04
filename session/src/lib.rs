//! Kardex Session
//!
//! The callable surface of the record-keeping application. A session owns
//! a store and executes each mutating operation inside its own transaction:
//! on error the transaction rolls back, so a failed operation leaves no
//! partial state behind.

mod error;
mod session;

pub use error::{SessionError, SessionResult};
pub use session::{Session, SessionId, SessionManager};
