//! Kardex Integration Test Support
//!
//! Shared fixtures and logging setup for the integration suites under
//! `tests/`. The suites drive the system exclusively through the session
//! facade, the same way an embedding application would.
//!
//! # Module Structure
//!
//! - [`fixtures`] - Canonical principals, contexts, and enrollment helpers
//! - [`logging`] - Tracing subscriber setup for test binaries


/// Everything a test suite needs in one import.
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::logging::init_test_logging;

    pub use kardex_core::{
        ExecContext, Nia, Principal, RecordId, RegistryId, StoreError, DEFAULT_GRUPO,
    };
    pub use kardex_ops::OpError;
    pub use kardex_session::{Session, SessionError, SessionManager};
}
