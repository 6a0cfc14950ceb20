//! Host environment detection.
//!
//! Classifies the host into an [`OsFamily`] and, on Linux, a [`Distro`]
//! family. The primary signal is the OS identity file; when it is
//! unreadable or unrecognised the detector looks for known package
//! managers on the search path. Detection never fails: total ambiguity
//! yields [`Distro::Unknown`].

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::probe::Probe;

/// Standard location of the OS identity metadata on Linux.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Linux,
    Darwin,
    Other,
}

impl OsFamily {
    /// Family of the running host.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a family.
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => OsFamily::Linux,
            "macos" => OsFamily::Darwin,
            _ => OsFamily::Other,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsFamily::Linux => "linux",
            OsFamily::Darwin => "darwin",
            OsFamily::Other => "other",
        };
        f.write_str(name)
    }
}

/// Linux distribution family, as far as package management is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Distro {
    Arch,
    Debian,
    Redhat,
    Unknown,
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Distro::Arch => "arch",
            Distro::Debian => "debian",
            Distro::Redhat => "redhat",
            Distro::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// The detected host environment. Computed once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Environment {
    pub os_family: OsFamily,
    pub distro: Distro,
}

impl Environment {
    /// Convenience constructor.
    pub fn new(os_family: OsFamily, distro: Distro) -> Self {
        Self { os_family, distro }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.os_family {
            OsFamily::Linux => write!(f, "linux ({})", self.distro),
            other => write!(f, "{}", other),
        }
    }
}

/// Substring markers, checked in order. Arch markers win over the rest
/// because derivatives often mention their parent distribution too.
const OS_RELEASE_MARKERS: &[(&[&str], Distro)] = &[
    (&["arch", "manjaro", "artix"], Distro::Arch),
    (&["ubuntu", "debian"], Distro::Debian),
    (&["centos", "rhel", "fedora"], Distro::Redhat),
];

/// Package managers probed when the identity file is inconclusive.
/// First hit wins.
const PACKAGE_MANAGER_MARKERS: &[(&str, Distro)] = &[
    ("pacman", Distro::Arch),
    ("apt", Distro::Debian),
    ("yum", Distro::Redhat),
    ("dnf", Distro::Redhat),
];

/// Classify OS identity metadata by case-insensitive marker scan.
pub fn classify_os_release(content: &str) -> Option<Distro> {
    let lowered = content.to_lowercase();
    OS_RELEASE_MARKERS
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| lowered.contains(m)))
        .map(|(_, distro)| *distro)
}

/// Classify by looking for known package-manager executables.
pub fn probe_package_managers(probe: &dyn Probe) -> Distro {
    for (manager, distro) in PACKAGE_MANAGER_MARKERS {
        if probe.is_available(manager) {
            tracing::debug!("found {} on PATH, assuming {}", manager, distro);
            return *distro;
        }
    }
    Distro::Unknown
}

/// Pure detection core: no filesystem access of its own.
///
/// `os_release` is the content of the identity file, or `None` when it
/// could not be read.
pub fn detect_with(
    os_family: OsFamily,
    os_release: Option<&str>,
    probe: &dyn Probe,
) -> Environment {
    if os_family != OsFamily::Linux {
        return Environment::new(os_family, Distro::Unknown);
    }

    if let Some(distro) = os_release.and_then(classify_os_release) {
        tracing::debug!("os-release identifies {}", distro);
        return Environment::new(os_family, distro);
    }

    tracing::debug!("os-release missing or unrecognised, probing package managers");
    Environment::new(os_family, probe_package_managers(probe))
}

/// Detects the host environment.
///
/// # Example
///
/// ```
/// use outfit::detection::{Distro, EnvironmentDetector, OsFamily, StaticProbe};
///
/// let probe = StaticProbe::new(["apt"]);
/// let env = EnvironmentDetector::new(&probe)
///     .with_os_family(OsFamily::Linux)
///     .with_os_release("/nonexistent/os-release")
///     .detect();
/// assert_eq!(env.distro, Distro::Debian);
/// ```
pub struct EnvironmentDetector<'a> {
    probe: &'a dyn Probe,
    os_family: OsFamily,
    os_release_path: PathBuf,
}

impl<'a> EnvironmentDetector<'a> {
    /// Detector for the running host.
    pub fn new(probe: &'a dyn Probe) -> Self {
        Self {
            probe,
            os_family: OsFamily::current(),
            os_release_path: PathBuf::from(OS_RELEASE_PATH),
        }
    }

    /// Override the OS family (for testing).
    pub fn with_os_family(mut self, os_family: OsFamily) -> Self {
        self.os_family = os_family;
        self
    }

    /// Read identity metadata from a different file.
    pub fn with_os_release(mut self, path: impl AsRef<Path>) -> Self {
        self.os_release_path = path.as_ref().to_path_buf();
        self
    }

    /// Detect the environment.
    pub fn detect(&self) -> Environment {
        let content = if self.os_family == OsFamily::Linux {
            match std::fs::read_to_string(&self.os_release_path) {
                Ok(content) => Some(content),
                Err(e) => {
                    tracing::debug!(
                        "could not read {}: {}",
                        self.os_release_path.display(),
                        e
                    );
                    None
                }
            }
        } else {
            None
        };

        let env = detect_with(self.os_family, content.as_deref(), self.probe);
        tracing::info!("detected environment: {}", env);
        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::probe::StaticProbe;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn arch_markers_classify_as_arch() {
        for content in ["ID=arch", "NAME=\"Manjaro Linux\"", "ID=artix"] {
            assert_eq!(classify_os_release(content), Some(Distro::Arch), "{content}");
        }
    }

    #[test]
    fn debian_markers_classify_as_debian() {
        assert_eq!(
            classify_os_release("PRETTY_NAME=\"Ubuntu 22.04 LTS\""),
            Some(Distro::Debian)
        );
        assert_eq!(classify_os_release("ID=debian"), Some(Distro::Debian));
    }

    #[test]
    fn redhat_markers_classify_as_redhat() {
        for content in ["ID=centos", "ID=\"rhel\"", "NAME=Fedora Linux"] {
            assert_eq!(classify_os_release(content), Some(Distro::Redhat), "{content}");
        }
    }

    #[test]
    fn arch_marker_wins_over_debian_marker() {
        let content = "ID=manjaro\nID_LIKE=arch\nHOME_URL=https://debian.example";
        assert_eq!(classify_os_release(content), Some(Distro::Arch));
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify_os_release("NAME=UBUNTU"), Some(Distro::Debian));
    }

    #[test]
    fn unrecognised_content_is_none() {
        assert_eq!(classify_os_release("ID=alpine\nNAME=Alpine"), None);
        assert_eq!(classify_os_release(""), None);
    }

    #[test]
    fn ubuntu_release_detects_linux_debian() {
        let probe = StaticProbe::default();
        let env = detect_with(OsFamily::Linux, Some("Ubuntu 22.04 LTS"), &probe);
        assert_eq!(env, Environment::new(OsFamily::Linux, Distro::Debian));
    }

    #[test]
    fn os_release_takes_priority_over_package_managers() {
        let probe = StaticProbe::new(["apt"]);
        let env = detect_with(OsFamily::Linux, Some("ID=arch"), &probe);
        assert_eq!(env.distro, Distro::Arch);
    }

    #[test]
    fn unrecognised_release_falls_back_to_probing() {
        let probe = StaticProbe::new(["dnf"]);
        let env = detect_with(OsFamily::Linux, Some("ID=alpine"), &probe);
        assert_eq!(env.distro, Distro::Redhat);
    }

    #[test]
    fn package_manager_priority_is_pacman_first() {
        let probe = StaticProbe::new(["apt", "pacman", "yum"]);
        assert_eq!(probe_package_managers(&probe), Distro::Arch);

        let probe = StaticProbe::new(["yum", "apt"]);
        assert_eq!(probe_package_managers(&probe), Distro::Debian);
    }

    #[test]
    fn missing_release_matches_direct_probing() {
        let cases: Vec<Vec<&str>> = vec![
            vec![],
            vec!["pacman"],
            vec!["apt"],
            vec!["yum"],
            vec!["dnf"],
            vec!["dnf", "apt"],
            vec!["pacman", "dnf"],
        ];
        for names in cases {
            let probe = StaticProbe::new(names.clone());
            let env = detect_with(OsFamily::Linux, None, &probe);
            assert_eq!(env.distro, probe_package_managers(&probe), "{names:?}");
        }
    }

    #[test]
    fn total_ambiguity_is_unknown() {
        let probe = StaticProbe::default();
        let env = detect_with(OsFamily::Linux, None, &probe);
        assert_eq!(env.distro, Distro::Unknown);
    }

    #[test]
    fn darwin_ignores_distro_signals() {
        let probe = StaticProbe::new(["pacman"]);
        let env = detect_with(OsFamily::Darwin, Some("ID=arch"), &probe);
        assert_eq!(env, Environment::new(OsFamily::Darwin, Distro::Unknown));
    }

    #[test]
    fn detector_reads_os_release_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("os-release");
        fs::write(&path, "NAME=\"Fedora Linux\"\nVERSION_ID=39\n").unwrap();

        let probe = StaticProbe::default();
        let env = EnvironmentDetector::new(&probe)
            .with_os_family(OsFamily::Linux)
            .with_os_release(&path)
            .detect();
        assert_eq!(env.distro, Distro::Redhat);
    }

    #[test]
    fn detector_falls_back_when_file_missing() {
        let temp = TempDir::new().unwrap();
        let probe = StaticProbe::new(["pacman"]);
        let env = EnvironmentDetector::new(&probe)
            .with_os_family(OsFamily::Linux)
            .with_os_release(temp.path().join("missing"))
            .detect();
        assert_eq!(env.distro, Distro::Arch);
    }

    #[test]
    fn os_family_from_os_names() {
        assert_eq!(OsFamily::from_os("linux"), OsFamily::Linux);
        assert_eq!(OsFamily::from_os("macos"), OsFamily::Darwin);
        assert_eq!(OsFamily::from_os("windows"), OsFamily::Other);
    }

    #[test]
    fn environment_display() {
        let env = Environment::new(OsFamily::Linux, Distro::Arch);
        assert_eq!(env.to_string(), "linux (arch)");
        let env = Environment::new(OsFamily::Darwin, Distro::Unknown);
        assert_eq!(env.to_string(), "darwin");
    }

    #[test]
    fn environment_serializes_lowercase() {
        let env = Environment::new(OsFamily::Linux, Distro::Redhat);
        let json = serde_json::to_string(&env).unwrap();
        assert_eq!(json, r#"{"os_family":"linux","distro":"redhat"}"#);
    }
}
