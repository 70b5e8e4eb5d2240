use colored::Colorize;
use mysql_lock_core::lock::LockRequest;
use std::io::{self, IsTerminal, Write};

/// Colors only when a person is watching stderr
pub fn configure_color() {
    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }
}

pub fn print_error(err: &anyhow::Error) -> io::Result<()> {
    let mut out = io::stderr().lock();
    writeln!(out, "{} {:#}", "error:".red().bold(), err)
}

pub fn print_denied(request: &LockRequest) -> io::Result<()> {
    let mut out = io::stderr().lock();
    writeln!(
        out,
        "{} lock '{}' not acquired within {}; command not run",
        "✗".red().bold(),
        request.name(),
        humantime::format_duration(request.timeout())
    )
}
