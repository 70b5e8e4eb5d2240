//! Backend traits for session-scoped locks

use super::{LockError, LockRequest};
use async_trait::async_trait;

/// Opens sessions against a lock provider.
///
/// Each call to [`connect`](LockBackend::connect) must produce an
/// independent session; locks taken through one session are never shared
/// with another.
#[async_trait]
pub trait LockBackend: Send + Sync {
    type Session: LockSession;

    async fn connect(&self) -> Result<Self::Session, LockError>;

    /// Where sessions connect to, for log lines. Must not contain secrets.
    fn describe(&self) -> String;
}

/// One open session holding zero or more named locks.
#[async_trait]
pub trait LockSession: Send {
    /// Ask for `request.name()`, waiting at most `request.timeout()`.
    ///
    /// `Ok(true)` only on an unambiguous grant. A timeout and an
    /// indeterminate answer are both `Ok(false)`; `Err` is reserved for
    /// a failed request.
    async fn try_acquire(&mut self, request: &LockRequest) -> Result<bool, LockError>;

    /// Close the session, releasing every lock it holds. Idempotent.
    async fn close(&mut self) -> Result<(), LockError>;
}
