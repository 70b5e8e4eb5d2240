//! Access to a real MySQL server for opt-in tests
//!
//! Live tests run only when `MYSQL_LOCK_TEST_HOST` is set:
//!
//! ```bash
//! MYSQL_LOCK_TEST_HOST=127.0.0.1 MYSQL_LOCK_TEST_USER=root \
//!   MYSQL_LOCK_TEST_PASSWORD=secret cargo test
//! ```

use mysql_lock_core::config::DbConfig;
use std::sync::atomic::{AtomicUsize, Ordering};

const HOST: &str = "MYSQL_LOCK_TEST_HOST";
const PORT: &str = "MYSQL_LOCK_TEST_PORT";
const USER: &str = "MYSQL_LOCK_TEST_USER";
const PASSWORD: &str = "MYSQL_LOCK_TEST_PASSWORD";

/// Connection parameters for the live server, or `None` to skip.
///
/// Prints a skip notice so the test output says why nothing ran.
pub fn live_db_config() -> Option<DbConfig> {
    let Ok(host) = std::env::var(HOST) else {
        eprintln!("Skipping test: {} not set", HOST);
        return None;
    };

    let defaults = DbConfig::default();
    let port = std::env::var(PORT)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(defaults.port);

    Some(DbConfig {
        host,
        port,
        user: std::env::var(USER).unwrap_or_else(|_| "root".to_string()),
        password: std::env::var(PASSWORD).unwrap_or_default(),
    })
}

/// A lock name no other test run will use
pub fn unique_lock_name(prefix: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("mlt-{}-{}-{}", prefix, std::process::id(), n)
}
