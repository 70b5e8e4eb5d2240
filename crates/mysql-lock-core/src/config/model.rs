use super::consts::defaults;
use crate::error::{MysqlLockError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Config file schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub db: DbConfig,
}

/// Connection parameters for the lock database
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    #[serde(deserialize_with = "scalar_string")]
    pub host: String,
    pub port: u16,
    #[serde(deserialize_with = "scalar_string")]
    pub user: String,
    #[serde(deserialize_with = "scalar_string")]
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: defaults::DB_HOST.to_string(),
            port: defaults::DB_PORT,
            user: String::new(),
            password: String::new(),
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl DbConfig {
    /// `user@host:port`, safe for logs and error messages
    pub fn endpoint(&self) -> String {
        format!("{}@{}:{}", self.user, self.host, self.port)
    }
}

impl Config {
    /// Rejects values that can never produce a working connection
    pub fn validate(&self) -> Result<()> {
        if self.db.host.trim().is_empty() {
            return Err(MysqlLockError::ConfigInvalidValue {
                field: "db.host".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.db.port == 0 {
            return Err(MysqlLockError::ConfigInvalidValue {
                field: "db.port".to_string(),
                reason: "must be between 1 and 65535".to_string(),
            });
        }
        Ok(())
    }
}

/// Accepts any YAML/env scalar as a string, so `password: 1234` works
fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Int(i64),
        UInt(u64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Str(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::UInt(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}
