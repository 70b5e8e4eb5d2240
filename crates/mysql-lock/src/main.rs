mod cli;
mod commands;
mod context;
mod exit;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use mysql_lock_core::config::consts::env;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too
            let _ = err.print();
            let code = if err.use_stderr() {
                exit::EXIT_USAGE
            } else {
                exit::EXIT_SUCCESS
            };
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);
    output::configure_color();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            let _ = output::print_error(&err);
            exit::error_code(&err)
        }
    };

    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    // One invocation, one connection, one child: no worker threads needed
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    runtime.block_on(commands::run::execute(cli))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(env::LOG, level)).init();
}
