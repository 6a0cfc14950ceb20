//! Process execution capability.
//!
//! The resolver, executor and verifier never spawn processes directly.
//! They go through [`ProcessRunner`], so their decision logic can be
//! exercised with scripted runners instead of real package managers.

use crate::error::Result;

use super::command::{execute, execute_check, CommandOptions, CommandResult};

/// Run shell commands and report how they exited.
pub trait ProcessRunner {
    /// Run a command with the parent's standard streams attached.
    ///
    /// Returns `Err` only when the process could not be launched.
    fn run(&self, command: &str) -> Result<CommandResult>;

    /// Run a command quietly and report whether it exited zero.
    ///
    /// Used for metadata queries (`pacman -Si`) and import checks where
    /// the output is noise to the operator.
    fn succeeds(&self, command: &str) -> bool;
}

/// Production runner backed by `sh -c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        tracing::debug!("running: {}", command);
        let result = execute(command, &CommandOptions::default())?;
        tracing::debug!("'{}' exited with {:?}", command, result.exit_code);
        Ok(result)
    }

    fn succeeds(&self, command: &str) -> bool {
        let ok = execute_check(command);
        tracing::debug!("query '{}' -> {}", command, ok);
        ok
    }
}
