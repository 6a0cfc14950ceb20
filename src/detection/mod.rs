//! Host environment detection and executable probing.

pub mod environment;
pub mod probe;

pub use environment::{
    classify_os_release, detect_with, probe_package_managers, Distro, Environment,
    EnvironmentDetector, OsFamily, OS_RELEASE_PATH,
};
pub use probe::{parse_system_path, resolve_tool_path, PathProbe, Probe, StaticProbe};
