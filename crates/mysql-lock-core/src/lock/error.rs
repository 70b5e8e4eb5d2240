//! Error types for lock acquisition

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum LockError {
    /// The requested name can never be locked
    #[error("LOCK_NAME_INVALID: {reason}")]
    InvalidName { reason: String },

    /// The lock server could not be reached
    #[error("DB_CONNECT_FAILED: cannot connect to {endpoint}")]
    Connect {
        endpoint: String,
        #[source]
        source: BoxError,
    },

    /// The acquisition statement failed (as opposed to returning "not granted")
    #[error("LOCK_QUERY_FAILED: acquiring lock '{name}' failed")]
    Query {
        name: String,
        #[source]
        source: BoxError,
    },

    /// The session was used after being closed
    #[error("LOCK_SESSION_CLOSED: session already closed")]
    SessionClosed,

    #[error("DB_CLOSE_FAILED: closing the lock session failed")]
    Close {
        #[source]
        source: BoxError,
    },
}

impl LockError {
    pub fn invalid_name(reason: impl Into<String>) -> Self {
        LockError::InvalidName {
            reason: reason.into(),
        }
    }
}
