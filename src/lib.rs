//! Outfit - Provision a reconnaissance toolkit on the host machine.
//!
//! Outfit detects the operating system and package-manager family,
//! resolves a declarative tool catalog to concrete install commands
//! (official repository first, then community helpers), runs them behind
//! a confirmation gate for privileged installs, and verifies the result.
//!
//! # Modules
//!
//! - [`catalog`] - Declarative tool catalog and package-manager chains
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`detection`] - Environment detection and PATH probing
//! - [`error`] - Error types and result aliases
//! - [`install`] - Resolver, policy gate and installer executor
//! - [`pipeline`] - End-to-end provisioning run and summary
//! - [`shell`] - Shell command execution
//! - [`ui`] - Confirmation prompts, spinners, and terminal output
//! - [`verify`] - Post-run verification
//! - [`workspace`] - Output directories and credentials file
//!
//! # Example
//!
//! ```
//! use outfit::catalog::{Catalog, ToolSpec};
//! use outfit::detection::{Distro, Environment, OsFamily, StaticProbe};
//! use outfit::install::{InstallVia, Resolver};
//! use outfit::shell::SystemRunner;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let env = Environment::new(OsFamily::Linux, Distro::Arch);
//! // pacman is absent, yay is installed: the helper tier wins.
//! let probe = StaticProbe::new(["yay"]);
//! let resolver = Resolver::new(&catalog, env, &probe, &SystemRunner);
//!
//! let resolved = resolver.resolve(&ToolSpec::package("sslscan", "sslscan"));
//! assert_eq!(resolved.via, InstallVia::Helper("yay".into()));
//! assert!(!resolved.requires_elevated_privilege);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod install;
pub mod pipeline;
pub mod shell;
pub mod ui;
pub mod verify;
pub mod workspace;

pub use error::{OutfitError, Result};
