//! Shell command execution.

pub mod command;
pub mod platform;
pub mod runner;

pub use command::{execute, execute_check, CommandOptions, CommandResult};
pub use platform::{is_ci, is_ci_with_env};
pub use runner::{ProcessRunner, SystemRunner};
