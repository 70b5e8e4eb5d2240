//! CLI command structure using clap

use clap::{ArgAction, Parser};
use mysql_lock_core::config::consts::{defaults, env};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "mysql-lock")]
#[command(version, about, long_about = None)]
#[command(override_usage = "mysql-lock [OPTIONS] -- <COMMAND> [ARGUMENT]...")]
#[command(after_help = "\
Exit status:
  the command's own code  lock acquired and the command ran
  128+N                   the command was killed by signal N
  246                     lock held elsewhere, command not run
  251                     command could not be started
  64 / 69 / 70 / 78       usage / database / internal / config error

A command may exit with one of these codes itself.")]
pub struct Cli {
    /// Configuration file (YAML, `db.host`, `db.port`, `db.user`, `db.password`)
    #[arg(short, long, value_name = "PATH", env = env::CONFIG, default_value = defaults::CONFIG_PATH)]
    pub config: PathBuf,

    /// Lock name shared by every cooperating invocation
    #[arg(short, long, env = env::NAME, default_value = defaults::LOCK_NAME)]
    pub name: String,

    /// Maximum wait for the lock (e.g. "30s", "1m 30s"; bare numbers are seconds)
    #[arg(
        short,
        long,
        value_name = "DURATION",
        env = env::TIMEOUT,
        default_value = defaults::TIMEOUT,
        value_parser = parse_timeout
    )]
    pub timeout: Duration,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run while holding the lock, with its arguments
    #[arg(
        value_name = "COMMAND",
        required = true,
        trailing_var_arg = true
    )]
    pub command: Vec<String>,
}

/// Command line that parsed but cannot be acted on
#[derive(Debug, Error)]
#[error("USAGE: {0}")]
pub struct UsageError(pub String);

/// Parse a timeout: a bare (fractional) number of seconds or a humantime duration
fn parse_timeout(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();

    if let Ok(secs) = raw.parse::<f64>() {
        return Duration::try_from_secs_f64(secs)
            .map_err(|_| format!("'{raw}' is not a non-negative number of seconds"));
    }

    humantime::parse_duration(raw).map_err(|e| format!("'{raw}' is not a duration: {e}"))
}
