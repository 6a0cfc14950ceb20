//! Configuration and catalog shared by the commands.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::config::{load_config, validate, validate_catalog_coverage, OutfitConfig};
use crate::error::Result;

/// Loaded configuration and tool catalog.
#[derive(Debug, Clone)]
pub struct Context {
    pub project_root: PathBuf,
    pub config: OutfitConfig,
    pub catalog: Catalog,
}

impl Context {
    /// Load and validate the config, then the catalog it points at.
    ///
    /// A relative `catalog:` path is taken from the project root. Every
    /// expected tool must be installable from that catalog.
    pub fn load(project_root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = load_config(project_root, config_path)?;
        validate(&config)?;

        let catalog = match &config.catalog {
            Some(path) => Catalog::load(&project_root.join(path))?,
            None => Catalog::builtin()?,
        };
        validate_catalog_coverage(&config, &catalog)?;

        Ok(Self {
            project_root: project_root.to_path_buf(),
            config,
            catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OutfitError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_use_builtin_catalog() {
        let temp = TempDir::new().unwrap();
        let ctx = Context::load(temp.path(), None).unwrap();
        assert_eq!(ctx.config, OutfitConfig::default());
        assert!(ctx.catalog.contains_tool("nuclei"));
    }

    #[test]
    fn custom_catalog_is_loaded_relative_to_project() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("tools.yml"),
            "catalogs:\n  debian:\n    - name: jq\n      command: sudo apt-get install -y jq\n",
        )
        .unwrap();
        fs::write(
            temp.path().join(".outfit.yml"),
            "catalog: tools.yml\nexpected_tools: [jq]\n",
        )
        .unwrap();

        let ctx = Context::load(temp.path(), None).unwrap();
        assert!(ctx.catalog.contains_tool("jq"));
        assert!(!ctx.catalog.contains_tool("nuclei"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".outfit.yml"), "python: \"\"\n").unwrap();
        let err = Context::load(temp.path(), None).unwrap_err();
        assert!(matches!(err, OutfitError::ConfigValidationError { .. }));
    }

    #[test]
    fn expected_tool_outside_catalog_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".outfit.yml"),
            "expected_tools: [whois, not-in-any-catalog]\n",
        )
        .unwrap();
        let err = Context::load(temp.path(), None).unwrap_err();
        assert!(matches!(err, OutfitError::ConfigValidationError { .. }));
        assert!(err.to_string().contains("not-in-any-catalog"));
    }

    #[test]
    fn default_tools_outside_custom_catalog_are_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("tools.yml"),
            "catalogs:\n  debian:\n    - name: jq\n      command: sudo apt-get install -y jq\n",
        )
        .unwrap();
        fs::write(temp.path().join(".outfit.yml"), "catalog: tools.yml\n").unwrap();
        let err = Context::load(temp.path(), None).unwrap_err();
        assert!(err.to_string().contains("nuclei"));
    }

    #[test]
    fn missing_catalog_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".outfit.yml"), "catalog: missing.yml\n").unwrap();
        let err = Context::load(temp.path(), None).unwrap_err();
        assert!(matches!(err, OutfitError::ConfigNotFound { .. }));
    }
}
