//! Lock, run the command, release

use crate::cli::Cli;
use crate::context::Context;
use crate::{exit, output};
use anyhow::Result;
use mysql_lock_core::exec::CommandOutcome;
use mysql_lock_core::lock::{LockBackend, MySqlBackend};
use mysql_lock_core::{Outcome, run_guarded};

/// Execute one invocation and return the process exit code
///
/// Errors are returned, not printed; `main` maps them to exit codes.
pub async fn execute(cli: Cli) -> Result<i32> {
    let ctx = Context::new(cli)?;
    let backend = MySqlBackend::new(&ctx.config.db);

    log::info!(
        "requesting lock '{}' on {} (timeout {:?})",
        ctx.request.name(),
        backend.describe(),
        ctx.request.timeout()
    );

    let outcome = run_guarded(&backend, &ctx.request, &ctx.command).await?;

    match outcome {
        Outcome::Denied => {
            let _ = output::print_denied(&ctx.request);
        }
        Outcome::Completed(CommandOutcome::Signaled(signal)) => {
            log::warn!("{} was killed by signal {}", ctx.command.program(), signal);
        }
        Outcome::Completed(CommandOutcome::Exited(code)) => {
            log::info!("{} exited with code {}", ctx.command.program(), code);
        }
    }

    Ok(exit::outcome_code(&outcome))
}
