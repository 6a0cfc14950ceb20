//! Built-in catalog embedded at compile time.

use std::path::Path;

use crate::error::Result;

use super::Catalog;

/// Embedded catalog source.
const BUILTIN_CATALOG: &str = include_str!("../../catalog/tools.yml");

/// Pseudo-path reported in parse errors for the embedded catalog.
pub const BUILTIN_CATALOG_PATH: &str = "catalog/tools.yml";

/// Load the built-in catalog.
pub fn load() -> Result<Catalog> {
    Catalog::from_yaml(BUILTIN_CATALOG, Path::new(BUILTIN_CATALOG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogKey, Source};
    use crate::config::OutfitConfig;
    use crate::detection::{Distro, Environment, OsFamily};

    #[test]
    fn builtin_catalog_parses() {
        let catalog = load().unwrap();
        for key in [
            CatalogKey::Arch,
            CatalogKey::Debian,
            CatalogKey::Redhat,
            CatalogKey::Darwin,
        ] {
            assert!(catalog.variant(key).is_some(), "missing {key:?}");
        }
    }

    #[test]
    fn every_expected_tool_is_in_some_catalog() {
        let catalog = load().unwrap();
        let config = OutfitConfig::default();
        for tool in &config.expected_tools {
            assert!(catalog.contains_tool(tool), "{tool} not in any catalog");
        }
    }

    #[test]
    fn arch_helpers_keep_maintainer_order() {
        let catalog = load().unwrap();
        let env = Environment::new(OsFamily::Linux, Distro::Arch);
        let pm = catalog.package_manager_for(&env).unwrap();
        assert_eq!(pm.helpers, ["paru", "yay", "pikaur", "trizen", "yaourt"]);
    }

    #[test]
    fn go_installs_declare_the_go_toolchain() {
        let catalog = load().unwrap();
        let env = Environment::new(OsFamily::Linux, Distro::Debian);
        for spec in catalog.tools_for(&env).unwrap() {
            if let Source::Command(cmd) = &spec.source {
                if cmd.contains("go install") || cmd.contains("go build") {
                    assert_eq!(spec.toolchain.as_deref(), Some("go"), "{}", spec.name);
                }
            }
        }
    }

    #[test]
    fn darwin_catalog_uses_direct_commands() {
        let catalog = load().unwrap();
        let env = Environment::new(OsFamily::Darwin, Distro::Unknown);
        let tools = catalog.tools_for(&env).unwrap();
        assert!(tools
            .iter()
            .all(|t| matches!(t.source, Source::Command(_))));
        assert!(catalog.package_manager_for(&env).is_none());
    }

    #[test]
    fn sslscan_resolves_through_package_chain_on_arch() {
        let catalog = load().unwrap();
        let env = Environment::new(OsFamily::Linux, Distro::Arch);
        let sslscan = catalog
            .tools_for(&env)
            .unwrap()
            .iter()
            .find(|t| t.name == "sslscan")
            .unwrap();
        assert_eq!(sslscan.source, Source::Package("sslscan".to_string()));
    }
}
