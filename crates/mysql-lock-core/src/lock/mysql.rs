//! MySQL `GET_LOCK` backend
//!
//! <https://dev.mysql.com/doc/refman/8.0/en/locking-functions.html#function_get-lock>
//!
//! `GET_LOCK(name, timeout)` answers `1` (granted), `0` (timed out) or
//! `NULL` (error, e.g. the thread was killed). Locks are released when the
//! session ends, so the connection is the lock.

use super::{LockBackend, LockError, LockRequest, LockSession};
use crate::config::DbConfig;
use async_trait::async_trait;
use sqlx::mysql::{MySql, MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use std::fmt;
use std::time::Duration;

const GET_LOCK_SQL: &str = "SELECT GET_LOCK(?, ?)";

/// Opens one plain connection per session; no pool.
#[derive(Clone)]
pub struct MySqlBackend {
    options: MySqlConnectOptions,
    endpoint: String,
}

impl MySqlBackend {
    pub fn new(db: &DbConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&db.host)
            .port(db.port)
            .username(&db.user)
            .password(&db.password)
            // GET_LOCK waits up to the timeout; that is not a slow query
            .log_slow_statements(log::LevelFilter::Off, Duration::ZERO);

        Self {
            options,
            endpoint: db.endpoint(),
        }
    }
}

// Connect options carry the password
impl fmt::Debug for MySqlBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlBackend")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl LockBackend for MySqlBackend {
    type Session = MySqlSession;

    async fn connect(&self) -> Result<MySqlSession, LockError> {
        let conn = self
            .options
            .connect()
            .await
            .map_err(|source| LockError::Connect {
                endpoint: self.endpoint.clone(),
                source: source.into(),
            })?;

        Ok(MySqlSession { conn: Some(conn) })
    }

    fn describe(&self) -> String {
        format!("mysql://{}", self.endpoint)
    }
}

/// A single MySQL connection; every lock it takes dies with it.
#[derive(Debug)]
pub struct MySqlSession {
    conn: Option<MySqlConnection>,
}

#[async_trait]
impl LockSession for MySqlSession {
    async fn try_acquire(&mut self, request: &LockRequest) -> Result<bool, LockError> {
        let conn = self.conn.as_mut().ok_or(LockError::SessionClosed)?;

        let status = sqlx::query_scalar::<MySql, Option<i64>>(GET_LOCK_SQL)
            .bind(request.name())
            .bind(request.wait_secs())
            .fetch_one(&mut *conn)
            .await
            .map_err(|source| LockError::Query {
                name: request.name().to_string(),
                source: source.into(),
            })?;

        log::trace!("GET_LOCK('{}') returned {:?}", request.name(), status);

        // NULL means the server could not tell; never treat that as held
        Ok(status == Some(1))
    }

    async fn close(&mut self) -> Result<(), LockError> {
        match self.conn.take() {
            Some(conn) => conn.close().await.map_err(|source| LockError::Close {
                source: source.into(),
            }),
            None => Ok(()),
        }
    }
}
