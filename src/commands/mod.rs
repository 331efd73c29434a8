//! Command implementations for taskspark.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod emit;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Emit(args) => emit::cmd_emit(args),
        Command::Check(args) => check::cmd_check(args),
    }
}
