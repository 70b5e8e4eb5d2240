//! Integration tests for argument handling

mod common;

use assert_cmd::assert::OutputAssertExt;
use common::mysql_lock;
use mysql_lock_core::config::DbConfig;
use mysql_lock_testkit::{temp_dir_in_workspace, write_config};
use predicates::prelude::*;
use std::io::ErrorKind;
use std::net::TcpListener;

#[test]
fn test_cli_version_flag() {
    mysql_lock()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mysql-lock"));
}

#[test]
fn test_cli_help_flag() {
    mysql_lock()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
fn test_cli_requires_command() {
    mysql_lock()
        .args(["-n", "job"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    mysql_lock()
        .args(["--frobnicate", "--", "true"])
        .assert()
        .code(64);
}

#[test]
fn test_mistyped_option_stops_before_config() {
    let temp = temp_dir_in_workspace();
    let missing = temp.path().join("absent.yaml");
    let sentinel = temp.path().join("ran");

    mysql_lock()
        .arg("-c")
        .arg(&missing)
        .args(["--timout", "10", "--", "touch"])
        .arg(&sentinel)
        .assert()
        .code(64)
        .stderr(predicate::str::contains("--timout"))
        .stderr(predicate::str::contains("CONFIG_READ_ERROR").not());

    assert!(!sentinel.exists());
}

#[test]
fn test_cli_rejects_bad_timeout() {
    mysql_lock()
        .args(["-t", "soon", "--", "true"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("timeout"));
}

#[test]
fn test_cli_rejects_negative_timeout() {
    mysql_lock()
        .args(["--timeout=-1", "--", "true"])
        .assert()
        .code(64);
}

#[test]
fn test_invalid_name_fails_before_connecting() {
    let temp = temp_dir_in_workspace();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let db = DbConfig {
        host: "127.0.0.1".to_string(),
        port: listener.local_addr().unwrap().port(),
        ..DbConfig::default()
    };
    let config = write_config(temp.path(), &db);
    let sentinel = temp.path().join("ran");

    mysql_lock()
        .arg("-c")
        .arg(&config)
        .args(["-n", &"x".repeat(65)])
        .arg("--")
        .arg("touch")
        .arg(&sentinel)
        .assert()
        .code(64)
        .stderr(predicate::str::contains("LOCK_NAME_INVALID"));

    assert!(!sentinel.exists());
    let accepted = listener.accept();
    assert!(
        matches!(&accepted, Err(err) if err.kind() == ErrorKind::WouldBlock),
        "no connection should have been attempted"
    );
}

#[test]
fn test_empty_name_is_usage_error() {
    let temp = temp_dir_in_workspace();
    let config = write_config(temp.path(), &DbConfig::default());

    mysql_lock()
        .arg("-c")
        .arg(&config)
        .args(["-n", "", "--", "true"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("LOCK_NAME_INVALID"));
}

#[test]
fn test_command_arguments_are_not_parsed_as_options() {
    // `-n` after `--` belongs to the command; the missing config proves
    // the options before `--` were the only ones read
    let temp = temp_dir_in_workspace();
    let missing = temp.path().join("absent.yaml");

    mysql_lock()
        .arg("-c")
        .arg(&missing)
        .args(["--", "echo", "-n", "hello"])
        .assert()
        .code(78);
}
