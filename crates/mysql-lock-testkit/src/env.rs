//! Environment isolation utilities for testing
//!
//! Tests that touch process environment variables serialize on
//! [`ENV_LOCK`] so parallel tests never observe each other's values.

use std::sync::Mutex;

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with `vars` set, restoring the previous values afterwards.
///
/// # Examples
///
/// ```rust
/// use mysql_lock_testkit::with_env_vars;
///
/// let host = with_env_vars(&[("MYSQL_LOCK_DOC_DB_HOST", "db.internal")], || {
///     std::env::var("MYSQL_LOCK_DOC_DB_HOST").unwrap()
/// });
/// assert_eq!(host, "db.internal");
/// assert!(std::env::var("MYSQL_LOCK_DOC_DB_HOST").is_err());
/// ```
pub fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| {
        // Only serializes access; the environment is still usable
        poisoned.into_inner()
    });

    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
        .collect();

    // SAFETY: We hold ENV_LOCK, so no other test mutates the environment
    // concurrently.
    unsafe {
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    // SAFETY: We still hold ENV_LOCK.
    unsafe {
        for (key, value) in saved {
            match value {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }

    match result {
        Ok(value) => value,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
