//! Configuration loader
//!
//! Merges, later sources winning:
//! 1. `Config::default()`
//! 2. the YAML config file (must exist and be readable)
//! 3. prefixed environment variables (`MYSQL_LOCK_DB_HOST`, ...)

use super::consts::env;
use super::model::Config;
use crate::error::{MysqlLockError, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
    env_prefix: String,
}

impl ConfigLoader {
    pub fn new<P: AsRef<Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            env_prefix: env::PREFIX.to_string(),
        }
    }

    /// Override the environment prefix (mostly for tests)
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load and validate the configuration
    ///
    /// # Errors
    ///
    /// - `ConfigRead` if the file is missing or unreadable
    /// - `ConfigInvalid` if a source cannot be parsed into [`Config`]
    /// - `ConfigInvalidValue` if the merged values fail validation
    pub fn load(&self) -> Result<Config> {
        // Figment skips missing files silently; the tool treats that as fatal
        File::open(&self.config_path).map_err(|source| MysqlLockError::ConfigRead {
            path: self.config_path.clone(),
            source,
        })?;

        let mut figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Yaml::file(&self.config_path))
            .merge(
                Env::prefixed(&self.env_prefix)
                    .only(env::DB_TYPED_KEYS)
                    .split("_"),
            );

        // `Env` parses values ("0123" becomes 123); strings go in untouched
        for (path, value) in self.verbatim_env() {
            figment = figment.merge(Serialized::default(&path, value));
        }

        let config: Config = figment.extract()?;

        config.validate()?;

        log::debug!(
            "loaded configuration from {}: {:?}",
            self.config_path.display(),
            config.db
        );

        Ok(config)
    }

    /// Dotted config path and raw value of each string key set in the environment
    fn verbatim_env(&self) -> Vec<(String, String)> {
        env::DB_STRING_KEYS
            .iter()
            .filter_map(|key| {
                let var = format!("{}{}", self.env_prefix, key.to_uppercase());
                let value = std::env::var(var).ok()?;
                Some((key.replacen('_', ".", 1), value))
            })
            .collect()
    }
}
