//! Database connection configuration
//!
//! Values are layered: built-in defaults, then the YAML config file, then
//! `MYSQL_LOCK_DB_*` environment variables.

pub mod consts;
mod loader;
mod model;

pub use loader::ConfigLoader;
pub use model::{Config, DbConfig};
