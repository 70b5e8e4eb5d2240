//! Process exit codes
//!
//! | Outcome                                  | Code        |
//! |------------------------------------------|-------------|
//! | lock granted, command exited 0           | 0           |
//! | lock granted, command exited K           | K           |
//! | lock granted, command killed by signal S | 128 + S     |
//! | lock granted, command failed to start    | 251         |
//! | lock denied                              | 246         |
//! | usage error                              | 64          |
//! | connection or lock statement failed      | 69          |
//! | anything unexpected                      | 70          |
//! | configuration error                      | 78          |
//!
//! A guarded command is free to exit with any of these codes itself; its
//! code is passed through unchanged.

use crate::cli::UsageError;
use mysql_lock_core::exec::CommandOutcome;
use mysql_lock_core::lock::LockError;
use mysql_lock_core::{MysqlLockError, Outcome};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 64;
pub const EXIT_UNAVAILABLE: i32 = 69;
pub const EXIT_INTERNAL: i32 = 70;
pub const EXIT_CONFIG: i32 = 78;
pub const EXIT_LOCK_DENIED: i32 = 246;
pub const EXIT_COMMAND_FAILED: i32 = 251;

/// Exit code for a run that reached the lock
pub fn outcome_code(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Denied => EXIT_LOCK_DENIED,
        Outcome::Completed(CommandOutcome::Exited(code)) => *code,
        Outcome::Completed(CommandOutcome::Signaled(signal)) => 128 + signal,
    }
}

/// Exit code for a run that stopped with an error
pub fn error_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<UsageError>().is_some() {
        return EXIT_USAGE;
    }

    match err.downcast_ref::<MysqlLockError>() {
        Some(err) if err.is_config() => EXIT_CONFIG,
        Some(MysqlLockError::Lock(LockError::InvalidName { .. })) => EXIT_USAGE,
        Some(MysqlLockError::Lock(_)) => EXIT_UNAVAILABLE,
        Some(MysqlLockError::Exec(_)) => EXIT_COMMAND_FAILED,
        Some(_) | None => EXIT_INTERNAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use mysql_lock_core::exec::ExecError;
    use std::io;

    // The outcomes themselves (denied, exit K, signal) are produced without a
    // server in mysql-lock-core/tests/guarded_run_tests.rs
    #[test]
    fn test_outcome_codes() {
        assert_eq!(
            outcome_code(&Outcome::Completed(CommandOutcome::Exited(0))),
            EXIT_SUCCESS
        );
        assert_eq!(
            outcome_code(&Outcome::Completed(CommandOutcome::Exited(3))),
            3
        );
        assert_eq!(
            outcome_code(&Outcome::Completed(CommandOutcome::Signaled(15))),
            143
        );
        assert_eq!(outcome_code(&Outcome::Denied), EXIT_LOCK_DENIED);
    }

    #[test]
    fn test_error_codes() {
        let config = anyhow::Error::from(MysqlLockError::ConfigInvalid("bad".to_string()));
        assert_eq!(error_code(&config), EXIT_CONFIG);

        let name = anyhow::Error::from(MysqlLockError::from(LockError::invalid_name("empty")));
        assert_eq!(error_code(&name), EXIT_USAGE);

        let connect = anyhow::Error::from(MysqlLockError::from(LockError::Connect {
            endpoint: "root@127.0.0.1:3306".to_string(),
            source: io::Error::from(io::ErrorKind::ConnectionRefused).into(),
        }));
        assert_eq!(error_code(&connect), EXIT_UNAVAILABLE);

        let launch = anyhow::Error::from(MysqlLockError::from(ExecError::Launch {
            program: "job".to_string(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        }));
        assert_eq!(error_code(&launch), EXIT_COMMAND_FAILED);

        let usage = anyhow::Error::from(UsageError("no command given".to_string()));
        assert_eq!(error_code(&usage), EXIT_USAGE);

        assert_eq!(error_code(&anyhow::anyhow!("runtime")), EXIT_INTERNAL);
    }

    #[test]
    fn test_error_code_sees_through_context() {
        let err: anyhow::Result<()> =
            Err(MysqlLockError::ConfigInvalid("bad".to_string())).context("loading config");
        assert_eq!(error_code(&err.unwrap_err()), EXIT_CONFIG);
    }

    #[test]
    fn test_codes_are_distinct() {
        let mut codes = vec![
            EXIT_SUCCESS,
            EXIT_USAGE,
            EXIT_UNAVAILABLE,
            EXIT_INTERNAL,
            EXIT_CONFIG,
            EXIT_LOCK_DENIED,
            EXIT_COMMAND_FAILED,
        ];
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 7);
    }
}
