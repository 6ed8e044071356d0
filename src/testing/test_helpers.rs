//! Shared test helpers for unit and integration tests

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// Serialize tests that change the process-wide thread bound.
///
/// The bound is global, so tests asserting on it must hold this guard for
/// their whole body. A panicking holder does not poison later tests.
pub fn thread_config_lock() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
