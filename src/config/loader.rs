//! Configuration file discovery and loading.

use crate::config::schema::OutfitConfig;
use crate::error::{OutfitError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = ".outfit.yml";

/// Find the project config at `<project>/.outfit.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into OutfitConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<OutfitConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OutfitError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            OutfitError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into OutfitConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<OutfitConfig> {
    if content.trim().is_empty() {
        return Ok(OutfitConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| OutfitError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, the project config is used
/// when present and the built-in defaults otherwise.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<OutfitConfig> {
    if let Some(override_path) = config_override {
        tracing::debug!("loading config from {}", override_path.display());
        return load_config_file(override_path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("no {} found; using defaults", CONFIG_FILE_NAME);
            Ok(OutfitConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_config_file() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, OutfitConfig::default());
    }

    #[test]
    fn finds_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".outfit.yml"), "app_name: recon").unwrap();

        assert!(find_project_config(temp.path()).is_some());
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.app_name, "recon");
    }

    #[test]
    fn override_path_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".outfit.yml"), "app_name: project").unwrap();
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "app_name: custom").unwrap();

        let config = load_config(temp.path(), Some(&custom)).unwrap();
        assert_eq!(config.app_name, "custom");
    }

    #[test]
    fn missing_override_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path(), Some(&temp.path().join("nope.yml"))).unwrap_err();
        assert!(matches!(err, OutfitError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".outfit.yml");
        fs::write(&path, "python: [unclosed").unwrap();

        let err = load_config(temp.path(), None).unwrap_err();
        match err {
            OutfitError::ConfigParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_is_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".outfit.yml"), "\n").unwrap();
        assert_eq!(load_config(temp.path(), None).unwrap(), OutfitConfig::default());
    }
}
