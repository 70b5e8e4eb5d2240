//! In-process lock server with session-scoped locks
//!
//! Mirrors the `GET_LOCK` contract closely enough to exercise the lock
//! and run pipeline without a database:
//!
//! - a name is held by at most one session at a time
//! - a session may ask again for a name it already holds
//! - waiting is bounded by the request timeout; zero means one attempt
//! - closing or dropping a session releases everything it held
//!
//! Faults can be switched on to simulate an unreachable server, a failing
//! statement, or an indeterminate (`NULL`) answer.

use async_trait::async_trait;
use mysql_lock_core::lock::{LockBackend, LockError, LockRequest, LockSession};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;
use tokio::time::Instant;

#[derive(Debug, Default)]
struct State {
    owners: HashMap<String, u64>,
    next_session: u64,
    connections: usize,
    refuse_connections: bool,
    fail_queries: bool,
    indeterminate: bool,
}

#[derive(Debug, Default)]
struct Inner {
    state: Mutex<State>,
    released: Notify,
}

/// Shared handle to one in-memory lock server
#[derive(Debug, Clone, Default)]
pub struct MemoryLockServer {
    inner: Arc<Inner>,
}

impl MemoryLockServer {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of `connect` calls seen, successful or not
    pub fn connections(&self) -> usize {
        self.state().connections
    }

    /// True while some open session holds `name`
    pub fn is_held(&self, name: &str) -> bool {
        self.state().owners.contains_key(name)
    }

    /// Make every following `connect` fail
    pub fn refuse_connections(&self) {
        self.state().refuse_connections = true;
    }

    /// Make every following acquisition statement fail
    pub fn fail_queries(&self) {
        self.state().fail_queries = true;
    }

    /// Answer every following acquisition with the equivalent of `NULL`
    pub fn answer_indeterminate(&self) {
        self.state().indeterminate = true;
    }

    fn release_session(&self, id: u64) {
        let released = {
            let mut state = self.state();
            let before = state.owners.len();
            state.owners.retain(|_, owner| *owner != id);
            before != state.owners.len()
        };
        if released {
            self.inner.released.notify_waiters();
        }
    }
}

#[async_trait]
impl LockBackend for MemoryLockServer {
    type Session = MemorySession;

    async fn connect(&self) -> Result<MemorySession, LockError> {
        let mut state = self.state();
        state.connections += 1;

        if state.refuse_connections {
            return Err(LockError::Connect {
                endpoint: self.describe(),
                source: io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused")
                    .into(),
            });
        }

        state.next_session += 1;
        Ok(MemorySession {
            id: state.next_session,
            server: self.clone(),
            open: true,
        })
    }

    fn describe(&self) -> String {
        "memory://lock-server".to_string()
    }
}

/// One session on a [`MemoryLockServer`]
#[derive(Debug)]
pub struct MemorySession {
    id: u64,
    server: MemoryLockServer,
    open: bool,
}

#[async_trait]
impl LockSession for MemorySession {
    async fn try_acquire(&mut self, request: &LockRequest) -> Result<bool, LockError> {
        if !self.open {
            return Err(LockError::SessionClosed);
        }

        let deadline = Instant::now() + request.timeout();
        let server = self.server.clone();

        loop {
            // Register for wakeups before looking, so a release between the
            // check and the wait is not missed
            let notified = server.inner.released.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            {
                let mut state = server.state();

                if state.fail_queries {
                    return Err(LockError::Query {
                        name: request.name().to_string(),
                        source: io::Error::other("simulated statement failure").into(),
                    });
                }
                if state.indeterminate {
                    return Ok(false);
                }

                match state.owners.get(request.name()) {
                    None => {
                        state.owners.insert(request.name().to_string(), self.id);
                        return Ok(true);
                    }
                    Some(&owner) if owner == self.id => return Ok(true),
                    Some(_) => {}
                }
            }

            if Instant::now() >= deadline {
                return Ok(false);
            }

            // Either woken by a release or out of time; the next pass decides
            let _ = tokio::time::timeout_at(deadline, notified).await;
        }
    }

    async fn close(&mut self) -> Result<(), LockError> {
        if self.open {
            self.open = false;
            self.server.release_session(self.id);
        }
        Ok(())
    }
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        // A dropped connection releases its locks
        if self.open {
            self.server.release_session(self.id);
        }
    }
}
