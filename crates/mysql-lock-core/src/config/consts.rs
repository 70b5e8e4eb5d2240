//! Built-in defaults and environment variable names

/// Values used when neither the config file nor the environment set them
pub mod defaults {
    /// Config file read when `--config` is not given
    pub const CONFIG_PATH: &str = "/etc/mysql_lock.yaml";

    /// Lock name used when `--name` is not given
    pub const LOCK_NAME: &str = "cron";

    /// Acquisition timeout used when `--timeout` is not given
    pub const TIMEOUT: &str = "0s";

    pub const DB_HOST: &str = "127.0.0.1";

    pub const DB_PORT: u16 = 3306;
}

/// Environment variables read by the loader and the CLI
pub mod env {
    /// Prefix shared by every database override (`MYSQL_LOCK_DB_HOST`, ...)
    pub const PREFIX: &str = "MYSQL_LOCK_";

    /// Keys after the prefix whose values are parsed (`MYSQL_LOCK_DB_PORT=3307`)
    pub const DB_TYPED_KEYS: &[&str] = &["db_port"];

    /// Keys after the prefix whose values are taken verbatim, so a password
    /// like `0123` stays `0123`
    pub const DB_STRING_KEYS: &[&str] = &["db_host", "db_user", "db_password"];

    pub const CONFIG: &str = "MYSQL_LOCK_CONFIG";
    pub const NAME: &str = "MYSQL_LOCK_NAME";
    pub const TIMEOUT: &str = "MYSQL_LOCK_TIMEOUT";

    /// env_logger filter override
    pub const LOG: &str = "MYSQL_LOCK_LOG";
}
