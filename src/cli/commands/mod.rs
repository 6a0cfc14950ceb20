//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`outfit run`, `outfit plan`)
//! - Shared config and catalog loading in [`context`]
//! - Consistent global flag handling

pub mod completions;
pub mod context;
pub mod detect;
pub mod dispatcher;
pub mod plan;
pub mod run;
pub mod verify;

pub use context::Context;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
