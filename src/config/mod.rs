//! Configuration loading, parsing, and validation for Outfit.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use outfit::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".outfit.yml"), "app_name: recon").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.app_name, "recon");
//! ```
//!
//! # Configuration File Location
//!
//! 1. `--config <path>` when given (must exist)
//! 2. Project config (`.outfit.yml`)
//! 3. Built-in defaults

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{OutfitConfig, DEFAULT_EXPECTED_TOOLS, DEFAULT_OUTPUT_DIRS, DEFAULT_PYTHON_PACKAGES};
pub use validator::{validate, validate_catalog_coverage, validate_config, ValidationError};
