//! Command implementations for djstart.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod doctor;
mod init;
mod new;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::New(args) => new::cmd_new(args),
        Command::Init(args) => init::cmd_init(args),
        Command::Doctor(args) => doctor::cmd_doctor(args),
    }
}
