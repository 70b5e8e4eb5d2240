use super::LockError;
use std::time::Duration;

/// Longest name `GET_LOCK` accepts, in characters
pub const MAX_LOCK_NAME_LEN: usize = 64;

/// A validated request for a named lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockRequest {
    name: String,
    timeout: Duration,
}

impl LockRequest {
    /// Build a request, rejecting names the server would refuse or truncate.
    ///
    /// A zero `timeout` makes the request a single non-blocking probe.
    pub fn new(name: impl Into<String>, timeout: Duration) -> Result<Self, LockError> {
        let name = name.into();

        if name.is_empty() {
            return Err(LockError::invalid_name("lock name must not be empty"));
        }

        let len = name.chars().count();
        if len > MAX_LOCK_NAME_LEN {
            return Err(LockError::invalid_name(format!(
                "lock name is {} characters long, the limit is {}",
                len, MAX_LOCK_NAME_LEN
            )));
        }

        Ok(Self { name, timeout })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// True when the request must not wait at all
    pub fn is_probe(&self) -> bool {
        self.timeout.is_zero()
    }

    /// Timeout in whole seconds, as `GET_LOCK` expects.
    ///
    /// Rounds up so a sub-second wait never turns into a probe.
    pub fn wait_secs(&self) -> u64 {
        let secs = self.timeout.as_secs();
        if self.timeout.subsec_nanos() > 0 {
            secs.saturating_add(1)
        } else {
            secs
        }
    }
}
