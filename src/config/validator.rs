//! Configuration validation rules.
//!
//! - The Python interpreter must be named
//! - The output root must be non-empty
//! - Listed names must be non-empty
//! - Every expected tool must appear in some catalog variant

use crate::catalog::Catalog;
use crate::config::schema::OutfitConfig;
use crate::error::{OutfitError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &OutfitConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.python.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-python",
            "'python' must name an interpreter".to_string(),
        ));
    }

    if config.output_root.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "empty-output-root",
            "'output_root' must not be empty".to_string(),
        ));
    }

    if config.credentials_file.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "empty-credentials-file",
            "'credentials_file' must not be empty".to_string(),
        ));
    }

    let lists: [(&str, &[String]); 5] = [
        ("output_dirs", &config.output_dirs),
        ("python_packages", &config.python_packages),
        ("expected_tools", &config.expected_tools),
        ("expected_modules", &config.expected_modules),
        ("helpers", config.helpers.as_deref().unwrap_or_default()),
    ];
    for (field, items) in lists {
        if items.iter().any(|item| item.trim().is_empty()) {
            errors.push(ValidationError::new(
                "empty-entry",
                format!("'{}' contains an empty entry", field),
            ));
        }
    }

    errors
}

/// Validate a configuration, joining all problems into one error.
pub fn validate(config: &OutfitConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(OutfitError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

/// Check expected tools against the active catalog.
///
/// A tool no variant installs could never be provisioned, only reported
/// missing.
pub fn validate_catalog_coverage(config: &OutfitConfig, catalog: &Catalog) -> Result<()> {
    let uncovered: Vec<&str> = config
        .expected_tools
        .iter()
        .filter(|tool| !catalog.contains_tool(tool))
        .map(String::as_str)
        .collect();

    if uncovered.is_empty() {
        Ok(())
    } else {
        Err(OutfitError::ConfigValidationError {
            message: format!(
                "'expected_tools' names tools no catalog installs: {}",
                uncovered.join(", ")
            ),
        })
    }
}
