//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, cleared so host settings cannot leak in.
pub const CLEARED_VARS: [(&str, Option<&str>); 6] = [
    ("API_KEY", None),
    ("OWNER_CREDENTIALS", None),
    ("RENDER_BASE_URL", None),
    ("RENDER_TIMEOUT", None),
    ("RENDER_DEFAULT_LIMIT", None),
    ("DOTENV_DISABLED", None),
];

/// Run `f` with every loader variable cleared except the ones given.
pub fn with_clean_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut all: Vec<(&str, Option<&str>)> = CLEARED_VARS.to_vec();
    for (key, value) in vars {
        match all.iter_mut().find(|(name, _)| name == key) {
            Some(entry) => entry.1 = Some(value),
            None => all.push((key, Some(value))),
        }
    }
    temp_env::with_vars(all, f)
}
