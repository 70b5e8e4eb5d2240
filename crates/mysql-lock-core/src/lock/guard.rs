//! Guard tying a granted lock to its session

use super::{LockError, LockSession};

/// Proof that a lock is held.
///
/// The lock is held for as long as the wrapped session is open. Call
/// [`release`](LockGuard::release) to close it deliberately; dropping the
/// guard drops the connection, which releases the lock as well.
#[derive(Debug)]
pub struct LockGuard<S: LockSession> {
    session: S,
    name: String,
}

impl<S: LockSession> LockGuard<S> {
    pub(crate) fn new(session: S, name: &str) -> Self {
        Self {
            session,
            name: name.to_string(),
        }
    }

    /// Name of the held lock
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Close the session, releasing the lock
    pub async fn release(mut self) -> Result<(), LockError> {
        log::debug!("releasing lock '{}'", self.name);
        self.session.close().await
    }
}
