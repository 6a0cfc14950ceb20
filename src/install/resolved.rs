//! Resolved install commands.

use std::fmt;

/// Which tier of the resolution chain produced a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallVia {
    /// A fixed catalog command.
    Direct,
    /// The distro's official repository.
    Official,
    /// A community helper (the helper's executable name).
    Helper(String),
    /// No source was found.
    Unresolved,
}

impl fmt::Display for InstallVia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallVia::Direct => write!(f, "direct"),
            InstallVia::Official => write!(f, "official repository"),
            InstallVia::Helper(helper) => write!(f, "helper {}", helper),
            InstallVia::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// A tool resolved to a concrete command for the detected environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInstall {
    /// Canonical tool name.
    pub tool: String,
    /// Shell command to run. Empty when unresolvable.
    pub command: String,
    /// The command runs with administrative rights and needs confirmation.
    pub requires_elevated_privilege: bool,
    /// The command needs a toolchain executable on PATH.
    pub requires_prerequisite_toolchain: bool,
    /// At least one installation source was found.
    pub resolvable: bool,
    /// Name of the required toolchain executable, if any.
    pub toolchain: Option<String>,
    /// Resolution tier that produced `command`.
    pub via: InstallVia,
    /// Advice shown when the tool could not be resolved.
    pub advisory: Option<String>,
}

impl ResolvedInstall {
    /// A fixed command. Elevation is inferred from a leading `sudo`.
    pub fn direct(tool: &str, command: &str) -> Self {
        Self {
            tool: tool.to_string(),
            command: command.to_string(),
            requires_elevated_privilege: is_elevated(command),
            requires_prerequisite_toolchain: false,
            resolvable: true,
            toolchain: None,
            via: InstallVia::Direct,
            advisory: None,
        }
    }

    /// Install through the official repository.
    pub fn official(tool: &str, command: String) -> Self {
        Self {
            tool: tool.to_string(),
            command,
            requires_elevated_privilege: true,
            requires_prerequisite_toolchain: false,
            resolvable: true,
            toolchain: None,
            via: InstallVia::Official,
            advisory: None,
        }
    }

    /// Install through a community helper, as the invoking user.
    pub fn helper(tool: &str, helper: &str, command: String) -> Self {
        Self {
            tool: tool.to_string(),
            command,
            requires_elevated_privilege: false,
            requires_prerequisite_toolchain: false,
            resolvable: true,
            toolchain: None,
            via: InstallVia::Helper(helper.to_string()),
            advisory: None,
        }
    }

    /// No source available.
    pub fn unresolved(tool: &str, advisory: String) -> Self {
        Self {
            tool: tool.to_string(),
            command: String::new(),
            requires_elevated_privilege: false,
            requires_prerequisite_toolchain: false,
            resolvable: false,
            toolchain: None,
            via: InstallVia::Unresolved,
            advisory: Some(advisory),
        }
    }

    /// Mark the install as needing a toolchain executable.
    pub fn with_toolchain(mut self, toolchain: Option<&str>) -> Self {
        self.requires_prerequisite_toolchain = toolchain.is_some();
        self.toolchain = toolchain.map(str::to_string);
        self
    }
}

/// Whether a command escalates privilege.
pub fn is_elevated(command: &str) -> bool {
    let command = command.trim_start();
    command == "sudo" || command.starts_with("sudo ")
}
