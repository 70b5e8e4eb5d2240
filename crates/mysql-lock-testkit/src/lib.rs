//! Test utilities for mysql-lock
//!
//! This crate provides shared testing utilities used across the mysql-lock workspace.

mod env;
mod fixtures;
mod live;
mod memory;

pub use env::{ENV_LOCK, with_env_vars};
pub use fixtures::{write_config, write_raw_config};
pub use live::{live_db_config, unique_lock_name};
pub use memory::{MemoryLockServer, MemorySession};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This keeps all test temporary files in one gitignored location that is
/// easy to clean up by hand.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use mysql_lock_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let tmp_base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}
