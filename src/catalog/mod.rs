//! Declarative tool catalog.
//!
//! The catalog maps each environment to the ordered list of tools to
//! install, and each Linux distro family to its package-manager chain.
//! Adding a distro is a data change in `catalog/tools.yml`, not new
//! control flow.
//!
//! # Example
//!
//! ```
//! use outfit::catalog::Catalog;
//! use outfit::detection::{Distro, Environment, OsFamily};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let env = Environment::new(OsFamily::Linux, Distro::Arch);
//! let tools = catalog.tools_for(&env).unwrap();
//! assert!(tools.iter().any(|t| t.name == "nuclei"));
//! ```

pub mod builtin;
pub mod spec;

pub use spec::{CatalogKey, PackageManagerDef, Source, ToolSpec};

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::detection::Environment;
use crate::error::{OutfitError, Result};

/// The full catalog: one tool list per environment variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    package_managers: BTreeMap<CatalogKey, PackageManagerDef>,
    catalogs: BTreeMap<CatalogKey, Vec<ToolSpec>>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        builtin::load()
    }

    /// Load a catalog from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OutfitError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                OutfitError::Io(e)
            }
        })?;
        Self::from_yaml(&content, path)
    }

    /// Parse and validate catalog YAML. `origin` is used in error messages.
    pub fn from_yaml(content: &str, origin: &Path) -> Result<Self> {
        let catalog: Catalog =
            serde_yaml::from_str(content).map_err(|e| OutfitError::ConfigParseError {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Tools for an environment, in install order.
    ///
    /// `None` means the environment is unsupported.
    pub fn tools_for(&self, env: &Environment) -> Option<&[ToolSpec]> {
        CatalogKey::for_environment(env).and_then(|key| self.variant(key))
    }

    /// Package-manager chain for an environment, if it has one.
    pub fn package_manager_for(&self, env: &Environment) -> Option<&PackageManagerDef> {
        CatalogKey::for_environment(env).and_then(|key| self.package_managers.get(&key))
    }

    /// A single catalog variant.
    pub fn variant(&self, key: CatalogKey) -> Option<&[ToolSpec]> {
        self.catalogs.get(&key).map(|v| v.as_slice())
    }

    /// Whether any variant lists a tool of this name.
    pub fn contains_tool(&self, name: &str) -> bool {
        self.catalogs
            .values()
            .any(|tools| tools.iter().any(|t| t.name == name))
    }

    fn validate(&self) -> Result<()> {
        for (key, tools) in &self.catalogs {
            let mut seen = HashSet::new();
            for tool in tools {
                if !seen.insert(tool.name.as_str()) {
                    return Err(OutfitError::ConfigValidationError {
                        message: format!("tool '{}' listed twice in {:?} catalog", tool.name, key),
                    });
                }
                if matches!(tool.source, Source::Package(_))
                    && !self.package_managers.contains_key(key)
                {
                    return Err(OutfitError::ConfigValidationError {
                        message: format!(
                            "tool '{}' uses a package source but {:?} has no package manager",
                            tool.name, key
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{Distro, OsFamily};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SMALL: &str = r#"
package_managers:
  arch:
    manager: pacman
    query: "pacman -Si {package}"
    install: "sudo pacman -S {package} --noconfirm"
    helpers: [paru, yay]
catalogs:
  arch:
    - name: whois
      package: whois
  debian:
    - name: tree
      command: sudo apt-get install tree
"#;

    #[test]
    fn parses_small_catalog() {
        let catalog = Catalog::from_yaml(SMALL, Path::new("small.yml")).unwrap();
        let arch = Environment::new(OsFamily::Linux, Distro::Arch);
        assert_eq!(catalog.tools_for(&arch).unwrap().len(), 1);
        assert!(catalog.package_manager_for(&arch).is_some());
        assert!(catalog.contains_tool("tree"));
        assert!(!catalog.contains_tool("nuclei"));
    }

    #[test]
    fn missing_variant_is_none() {
        let catalog = Catalog::from_yaml(SMALL, Path::new("small.yml")).unwrap();
        let darwin = Environment::new(OsFamily::Darwin, Distro::Unknown);
        assert!(catalog.tools_for(&darwin).is_none());
    }

    #[test]
    fn other_os_has_no_tools() {
        let catalog = Catalog::builtin().unwrap();
        let other = Environment::new(OsFamily::Other, Distro::Unknown);
        assert!(catalog.tools_for(&other).is_none());
    }

    #[test]
    fn duplicate_tool_is_rejected() {
        let yaml = r#"
catalogs:
  debian:
    - name: tree
      command: a
    - name: tree
      command: b
"#;
        let err = Catalog::from_yaml(yaml, Path::new("dup.yml")).unwrap_err();
        assert!(matches!(err, OutfitError::ConfigValidationError { .. }));
        assert!(err.to_string().contains("twice"));
    }

    #[test]
    fn package_source_without_manager_is_rejected() {
        let yaml = r#"
catalogs:
  darwin:
    - name: whois
      package: whois
"#;
        let err = Catalog::from_yaml(yaml, Path::new("bad.yml")).unwrap_err();
        assert!(err.to_string().contains("no package manager"));
    }

    #[test]
    fn malformed_yaml_reports_origin() {
        let err = Catalog::from_yaml("catalogs: [", Path::new("broken.yml")).unwrap_err();
        match err {
            OutfitError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("broken.yml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tools.yml");
        std::fs::write(&path, SMALL).unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert!(catalog.contains_tool("whois"));
    }

    #[test]
    fn load_missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let err = Catalog::load(&temp.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, OutfitError::ConfigNotFound { .. }));
    }
}
