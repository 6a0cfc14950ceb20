//! Resolution and execution engine.
//!
//! - [`Resolver`] maps catalog entries to concrete commands
//! - [`gate`] decides whether each command may run
//! - [`execute`] runs approved commands and [`Outcomes`] aggregates them

pub mod executor;
pub mod gate;
pub mod resolved;
pub mod resolver;

pub use executor::{execute, InstallOutcome, InstallStatus, Outcomes, SkipReason};
pub use gate::{elevation_prompt, gate, precheck, GateDecision, Precheck};
pub use resolved::{is_elevated, InstallVia, ResolvedInstall};
pub use resolver::Resolver;
