//! Core of `mysql-lock`: run a command while holding a MySQL advisory lock.
//!
//! The pieces are wired together by [`guarded::run_guarded`]:
//!
//! 1. [`config`] resolves the database connection parameters
//! 2. [`lock`] opens one session and asks the server for a named lock
//! 3. [`exec`] runs the command with the caller's standard streams
//!
//! The lock lives exactly as long as the session that took it.

// Core modules
pub mod config;
pub mod error;
pub mod exec;
pub mod guarded;
pub mod lock;

// Re-export commonly used types
pub use error::{MysqlLockError, Result};
pub use guarded::{Outcome, run_guarded};
