//! Lock, run, release: one guarded invocation

use crate::error::Result;
use crate::exec::{self, CommandOutcome, CommandSpec};
use crate::lock::{self, LockBackend, LockRequest};

/// Result of a guarded run that got as far as asking for the lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The lock was held elsewhere; the command was not started
    Denied,
    /// The lock was held for the whole run of the command
    Completed(CommandOutcome),
}

/// Acquire `request` through `backend` and, only if granted, run `command`
/// while the lock's session stays open.
///
/// The session is closed on every path out of this function. If the
/// process dies instead, the server drops the lock when it notices the
/// connection is gone.
///
/// # Errors
///
/// Connection and query failures (`MysqlLockError::Lock`) and launch
/// failures (`MysqlLockError::Exec`). A denied lock is `Ok(Outcome::Denied)`.
pub async fn run_guarded<B: LockBackend>(
    backend: &B,
    request: &LockRequest,
    command: &CommandSpec,
) -> Result<Outcome> {
    let Some(guard) = lock::acquire(backend, request).await? else {
        return Ok(Outcome::Denied);
    };

    let result = exec::run_command(command).await;

    if let Err(err) = guard.release().await {
        // The command already ran; the server frees the lock with the socket
        log::warn!("{}", err);
    }

    Ok(Outcome::Completed(result?))
}
