//! crates/test-support/src/session.rs
//! Lock serialising tests that touch the process-wide loggers.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

fn global_logger_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Guard granting exclusive use of the process-wide loggers to one test.
///
/// Tests that retarget the standard or error logger, or that assert on their
/// default outputs, hold a session for their whole body so that parallel
/// tests in the same binary never observe each other's redirections.
#[must_use = "dropping the session releases the global loggers immediately"]
pub struct GlobalLoggerSession {
    _guard: MutexGuard<'static, ()>,
}

/// Acquires the global logger session, blocking until it is free.
///
/// A test that panicked while holding the session does not poison it for the
/// remaining tests.
pub fn global_logger_session() -> GlobalLoggerSession {
    GlobalLoggerSession {
        _guard: global_logger_lock()
            .lock()
            .unwrap_or_else(PoisonError::into_inner),
    }
}
