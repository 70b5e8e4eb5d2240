//! Shared helpers for binary tests

#![allow(dead_code)]

use assert_cmd::cargo_bin;
use std::net::TcpListener;
use std::process::Command;

/// Variables the binary reads; cleared so the caller's shell cannot leak in
const INHERITED_VARS: &[&str] = &[
    "MYSQL_LOCK_CONFIG",
    "MYSQL_LOCK_NAME",
    "MYSQL_LOCK_TIMEOUT",
    "MYSQL_LOCK_LOG",
    "MYSQL_LOCK_DB_HOST",
    "MYSQL_LOCK_DB_PORT",
    "MYSQL_LOCK_DB_USER",
    "MYSQL_LOCK_DB_PASSWORD",
];

/// The binary under test with a clean environment
pub fn mysql_lock() -> Command {
    let mut cmd = Command::new(cargo_bin!("mysql-lock"));
    for var in INHERITED_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// A local port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);
    port
}
