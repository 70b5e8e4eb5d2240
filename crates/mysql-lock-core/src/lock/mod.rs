//! Server-side advisory locks for cross-host mutual exclusion
//!
//! A lock is requested through a [`LockSession`], one database connection
//! opened by a [`LockBackend`]. The server ties the lock to that session:
//! it is held until the session closes, whether by [`LockGuard::release`],
//! by dropping the guard, or by the process dying and the server noticing
//! the lost connection. Nothing here ever calls an explicit unlock.

mod backend;
mod error;
mod guard;
mod mysql;
mod request;

pub use backend::{LockBackend, LockSession};
pub use error::LockError;
pub use guard::LockGuard;
pub use mysql::{MySqlBackend, MySqlSession};
pub use request::{LockRequest, MAX_LOCK_NAME_LEN};

/// Opens a session on `backend` and asks for `request` once.
///
/// Returns `Ok(Some(guard))` when the server granted the lock, and
/// `Ok(None)` when it was still held elsewhere after `request.timeout()`.
/// An ambiguous answer from the server counts as not granted.
///
/// The session is closed before returning unless the lock was granted, in
/// which case it moves into the guard and must be kept alive for as long
/// as the lock is needed.
///
/// # Errors
///
/// - `LockError::Connect` if the session cannot be opened
/// - `LockError::Query` if the acquisition statement itself fails
///
/// # Examples
///
/// ```no_run
/// use mysql_lock_core::config::DbConfig;
/// use mysql_lock_core::lock::{acquire, LockRequest, MySqlBackend};
/// use std::time::Duration;
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = MySqlBackend::new(&DbConfig::default());
/// let request = LockRequest::new("nightly-report", Duration::from_secs(5))?;
/// if let Some(guard) = acquire(&backend, &request).await? {
///     // Critical section here
///     guard.release().await?;
/// }
/// # Ok(())
/// # }
/// ```
pub async fn acquire<B: LockBackend>(
    backend: &B,
    request: &LockRequest,
) -> Result<Option<LockGuard<B::Session>>, LockError> {
    let mut session = backend.connect().await?;
    log::debug!("connected to {}", backend.describe());

    match session.try_acquire(request).await {
        Ok(true) => {
            log::info!("acquired lock '{}'", request.name());
            Ok(Some(LockGuard::new(session, request.name())))
        }
        Ok(false) => {
            log::info!(
                "lock '{}' not acquired within {:?}",
                request.name(),
                request.timeout()
            );
            close_quietly(&mut session).await;
            Ok(None)
        }
        Err(err) => {
            close_quietly(&mut session).await;
            Err(err)
        }
    }
}

async fn close_quietly<S: LockSession>(session: &mut S) {
    if let Err(err) = session.close().await {
        log::warn!("failed to close lock session cleanly: {}", err);
    }
}
