//! Run the guarded command with the caller's standard streams

use std::fmt;
use std::io;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::Command;

/// Program and argument vector, passed to the OS as-is (no shell)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a full argv into program and arguments; `None` when empty
    pub fn from_argv(argv: Vec<String>) -> Option<Self> {
        let mut iter = argv.into_iter();
        let program = iter.next()?;
        Some(Self {
            program,
            args: iter.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How the command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Normal exit with this code
    Exited(i32),
    /// Killed by this signal (unix only)
    Signaled(i32),
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        matches!(self, CommandOutcome::Exited(0))
    }

    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return CommandOutcome::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return CommandOutcome::Signaled(signal);
            }
        }

        // Neither a code nor a signal: report a generic failure
        CommandOutcome::Exited(1)
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Exited(code) => write!(f, "exit code {}", code),
            CommandOutcome::Signaled(signal) => write!(f, "signal {}", signal),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("COMMAND_NOT_FOUND: '{program}' is not an executable file or on PATH")]
    NotFound {
        program: String,
        source: which::Error,
    },

    #[error("COMMAND_LAUNCH_FAILED: cannot start '{program}'")]
    Launch { program: String, source: io::Error },

    #[error("COMMAND_WAIT_FAILED: lost track of '{program}'")]
    Wait { program: String, source: io::Error },
}

/// Spawn `spec` with inherited stdin/stdout/stderr, working directory and
/// environment, and wait for it to finish.
///
/// The wait is unbounded. Signals sent to the terminal's process group
/// reach the child directly.
pub async fn run_command(spec: &CommandSpec) -> Result<CommandOutcome, ExecError> {
    let resolved = which::which(spec.program()).map_err(|source| ExecError::NotFound {
        program: spec.program().to_string(),
        source,
    })?;

    log::debug!("running {} ({})", spec, resolved.display());

    let mut command = Command::new(&resolved);
    command
        .args(spec.args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    // Keep argv[0] as typed, not the resolved path
    #[cfg(unix)]
    command.arg0(spec.program());

    let mut child = command.spawn().map_err(|source| ExecError::Launch {
        program: spec.program().to_string(),
        source,
    })?;

    let status = child.wait().await.map_err(|source| ExecError::Wait {
        program: spec.program().to_string(),
        source,
    })?;

    let outcome = CommandOutcome::from_status(status);
    log::debug!("{} finished with {}", spec.program(), outcome);
    Ok(outcome)
}
