//! Executable availability probing.
//!
//! Every "is X installed?" question in Outfit goes through [`Probe`]:
//! package-manager fallback detection, community-helper discovery, the
//! toolchain check and post-install verification.
//!
//! # Example
//!
//! ```no_run
//! use outfit::detection::{PathProbe, Probe};
//!
//! let probe = PathProbe::from_env();
//! if probe.is_available("go") {
//!     println!("Go toolchain found");
//! }
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Answers whether an executable is present on the search path.
///
/// Implementations must never fail: anything that prevents the lookup
/// counts as "not available".
pub trait Probe {
    /// Whether `name` resolves to an executable.
    fn is_available(&self, name: &str) -> bool;
}

/// Probe backed by a list of search-path directories.
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    entries: Vec<PathBuf>,
}

impl PathProbe {
    /// Probe the directories named by the `PATH` environment variable.
    ///
    /// An unset `PATH` yields a probe that finds nothing.
    pub fn from_env() -> Self {
        Self {
            entries: parse_system_path(),
        }
    }

    /// Probe an explicit list of directories.
    pub fn with_entries(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// Full path of the first matching executable.
    fn locate(&self, name: &str) -> Option<PathBuf> {
        resolve_tool_path(name, &self.entries)
    }
}

impl Probe for PathProbe {
    fn is_available(&self, name: &str) -> bool {
        self.locate(name).is_some()
    }
}

/// Fixed set of executable names, for dry plans and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    available: BTreeSet<String>,
}

impl StaticProbe {
    /// Probe that reports exactly `names` as available.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Probe for StaticProbe {
    fn is_available(&self, name: &str) -> bool {
        self.available.contains(name)
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command, which is missing on minimal images and is
/// sometimes a shell builtin with inconsistent exit codes.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if tool.is_empty() || tool.contains('/') {
        return None;
    }
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
