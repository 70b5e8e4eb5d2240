use crate::exec::ExecError;
use crate::lock::LockError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MysqlLockError {
    // Config errors
    #[error("CONFIG_READ_ERROR: cannot read config file '{}'", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CONFIG_INVALID: {0}")]
    ConfigInvalid(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Lock errors
    #[error(transparent)]
    Lock(#[from] LockError),

    // Command errors
    #[error(transparent)]
    Exec(#[from] ExecError),
}

impl From<figment::Error> for MysqlLockError {
    fn from(err: figment::Error) -> Self {
        MysqlLockError::ConfigInvalid(err.to_string())
    }
}

impl MysqlLockError {
    /// True for errors raised while reading or validating configuration
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            MysqlLockError::ConfigRead { .. }
                | MysqlLockError::ConfigInvalid(_)
                | MysqlLockError::ConfigInvalidValue { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MysqlLockError>;
