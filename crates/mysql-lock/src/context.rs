//! Resolved invocation: what to lock, what to run, where to connect

use crate::cli::{Cli, UsageError};
use anyhow::Result;
use mysql_lock_core::MysqlLockError;
use mysql_lock_core::config::{Config, ConfigLoader};
use mysql_lock_core::exec::CommandSpec;
use mysql_lock_core::lock::LockRequest;

/// Everything one invocation needs, built once and then only read
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub request: LockRequest,
    pub command: CommandSpec,
}

impl Context {
    /// Validate the command line, then load the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock name is empty or too long
    /// - No command was given
    /// - The config file cannot be read, parsed or validated
    pub fn new(cli: Cli) -> Result<Self> {
        // Usage problems first: nothing is read or opened before these pass
        let request = LockRequest::new(cli.name, cli.timeout).map_err(MysqlLockError::from)?;
        let command = CommandSpec::from_argv(cli.command)
            .ok_or_else(|| UsageError("no command given".to_string()))?;

        let config = ConfigLoader::new(&cli.config).load()?;

        Ok(Self {
            config,
            request,
            command,
        })
    }
}
