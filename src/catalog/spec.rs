//! Catalog entry types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::detection::{Distro, Environment, OsFamily};

/// Which catalog variant applies to an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKey {
    Arch,
    Debian,
    Redhat,
    Darwin,
}

impl CatalogKey {
    /// Select the catalog variant for an environment.
    ///
    /// Unknown Linux distributions use the debian-like catalog. Hosts
    /// outside Linux and macOS have no catalog.
    pub fn for_environment(env: &Environment) -> Option<Self> {
        match env.os_family {
            OsFamily::Linux => Some(match env.distro {
                Distro::Arch => CatalogKey::Arch,
                Distro::Redhat => CatalogKey::Redhat,
                Distro::Debian | Distro::Unknown => CatalogKey::Debian,
            }),
            OsFamily::Darwin => Some(CatalogKey::Darwin),
            OsFamily::Other => None,
        }
    }

    /// Name used in `catalog/tools.yml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKey::Arch => "arch",
            CatalogKey::Debian => "debian",
            CatalogKey::Redhat => "redhat",
            CatalogKey::Darwin => "darwin",
        }
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a tool comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A fixed shell command.
    Command(String),
    /// A package name resolved through the official repository and then
    /// the community helpers.
    Package(String),
}

/// A tool the catalog knows how to install.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawToolSpec")]
pub struct ToolSpec {
    /// Canonical tool name (also the executable name verified afterwards).
    pub name: String,
    /// Installation source.
    pub source: Source,
    /// Executable that must be on PATH for the install to run (e.g. `go`).
    pub toolchain: Option<String>,
}

impl ToolSpec {
    /// Tool installed by a fixed command.
    pub fn command(name: &str, command: &str) -> Self {
        Self {
            name: name.to_string(),
            source: Source::Command(command.to_string()),
            toolchain: None,
        }
    }

    /// Tool installed from a package of the given name.
    pub fn package(name: &str, package: &str) -> Self {
        Self {
            name: name.to_string(),
            source: Source::Package(package.to_string()),
            toolchain: None,
        }
    }

    /// Require a toolchain executable.
    pub fn with_toolchain(mut self, toolchain: &str) -> Self {
        self.toolchain = Some(toolchain.to_string());
        self
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawToolSpec {
    name: String,
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    package: Option<String>,
    #[serde(default)]
    toolchain: Option<String>,
}

impl TryFrom<RawToolSpec> for ToolSpec {
    type Error = String;

    fn try_from(raw: RawToolSpec) -> Result<Self, Self::Error> {
        if raw.name.trim().is_empty() {
            return Err("tool name must not be empty".to_string());
        }
        let source = match (raw.command, raw.package) {
            (Some(cmd), None) if !cmd.trim().is_empty() => Source::Command(cmd),
            (None, Some(pkg)) if !pkg.trim().is_empty() => Source::Package(pkg),
            (Some(_), Some(_)) => {
                return Err(format!(
                    "tool '{}' sets both `command` and `package`",
                    raw.name
                ))
            }
            _ => {
                return Err(format!(
                    "tool '{}' needs a non-empty `command` or `package`",
                    raw.name
                ))
            }
        };
        Ok(Self {
            name: raw.name,
            source,
            toolchain: raw.toolchain,
        })
    }
}

const DEFAULT_HELPER_INSTALL: &str = "{helper} -S {package} --noconfirm";

/// How a distro family installs packages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageManagerDef {
    /// Executable used for the repository query.
    pub manager: String,
    /// Metadata query template; exits zero when the package exists.
    pub query: String,
    /// Official-repository install template (usually privileged).
    pub install: String,
    /// Community helpers in priority order.
    #[serde(default)]
    pub helpers: Vec<String>,
    /// Helper install template.
    #[serde(default)]
    pub helper_install: Option<String>,
}

impl PackageManagerDef {
    /// Repository metadata query for a package.
    pub fn query_command(&self, package: &str) -> String {
        self.query.replace("{package}", package)
    }

    /// Official-repository install command for a package.
    pub fn install_command(&self, package: &str) -> String {
        self.install.replace("{package}", package)
    }

    /// Install command through a community helper.
    pub fn helper_install_command(&self, helper: &str, package: &str) -> String {
        self.helper_install
            .as_deref()
            .unwrap_or(DEFAULT_HELPER_INSTALL)
            .replace("{helper}", helper)
            .replace("{package}", package)
    }
}
