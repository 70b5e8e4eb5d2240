//! Config file fixtures

use mysql_lock_core::config::{Config, DbConfig};
use std::path::{Path, PathBuf};

/// Write a YAML config file for `db` into `dir` and return its path
///
/// # Panics
///
/// Panics if the config cannot be serialized or written.
pub fn write_config(dir: &Path, db: &DbConfig) -> PathBuf {
    let config = Config { db: db.clone() };
    let yaml = serde_yaml::to_string(&config).expect("Failed to serialize config");
    write_raw_config(dir, &yaml)
}

/// Write `contents` verbatim as `mysql_lock.yaml` in `dir`
pub fn write_raw_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("mysql_lock.yaml");
    std::fs::write(&path, contents).expect("Failed to write config file");
    path
}
