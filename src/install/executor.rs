//! Installer executor and outcome aggregation.

use std::fmt;

use serde::Serialize;

use crate::shell::ProcessRunner;

use super::gate::GateDecision;
use super::resolved::ResolvedInstall;

/// Three-way status of one install attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallStatus {
    Succeeded,
    Failed,
    Skipped,
}

/// Why an install was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Unresolved,
    MissingToolchain,
    Declined,
    DryRun,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::Unresolved => "no installation source",
            SkipReason::MissingToolchain => "toolchain not installed",
            SkipReason::Declined => "declined",
            SkipReason::DryRun => "dry run",
        };
        f.write_str(text)
    }
}

impl SkipReason {
    /// Skip reason for a gate decision; `None` for `Proceed`.
    pub fn from_decision(decision: GateDecision) -> Option<Self> {
        match decision {
            GateDecision::Proceed => None,
            GateDecision::SkipConfirmationDeclined => Some(SkipReason::Declined),
            GateDecision::SkipUnresolved => Some(SkipReason::Unresolved),
            GateDecision::SkipMissingToolchain => Some(SkipReason::MissingToolchain),
        }
    }
}

/// Result of one install attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallOutcome {
    pub tool: String,
    pub status: InstallStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<SkipReason>,
}

impl InstallOutcome {
    pub fn succeeded(tool: &str) -> Self {
        Self {
            tool: tool.to_string(),
            status: InstallStatus::Succeeded,
            reason: None,
        }
    }

    pub fn failed(tool: &str) -> Self {
        Self {
            tool: tool.to_string(),
            status: InstallStatus::Failed,
            reason: None,
        }
    }

    pub fn skipped(tool: &str, reason: SkipReason) -> Self {
        Self {
            tool: tool.to_string(),
            status: InstallStatus::Skipped,
            reason: Some(reason),
        }
    }
}

/// Run an approved install command.
///
/// Exit code zero is success. A non-zero exit, death by signal, or a
/// launch failure is a failure.
pub fn execute(resolved: &ResolvedInstall, runner: &dyn ProcessRunner) -> InstallOutcome {
    tracing::info!("installing {}: {}", resolved.tool, resolved.command);
    match runner.run(&resolved.command) {
        Ok(result) if result.exit_code == Some(0) => InstallOutcome::succeeded(&resolved.tool),
        Ok(result) => {
            tracing::warn!("{} exited with {:?}", resolved.tool, result.exit_code);
            InstallOutcome::failed(&resolved.tool)
        }
        Err(e) => {
            tracing::warn!("{} could not be launched: {}", resolved.tool, e);
            InstallOutcome::failed(&resolved.tool)
        }
    }
}

/// Install outcomes in order of first attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Outcomes {
    entries: Vec<InstallOutcome>,
}

impl Outcomes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome. A tool already recorded keeps its first entry.
    pub fn record(&mut self, outcome: InstallOutcome) {
        if self.entries.iter().any(|o| o.tool == outcome.tool) {
            tracing::debug!("{} already recorded", outcome.tool);
            return;
        }
        self.entries.push(outcome);
    }

    /// All outcomes.
    pub fn entries(&self) -> &[InstallOutcome] {
        &self.entries
    }

    /// Names of tools that installed.
    pub fn succeeded(&self) -> Vec<&str> {
        self.names(|o| o.status == InstallStatus::Succeeded)
    }

    /// Names of tools that failed or were skipped.
    pub fn failed_or_skipped(&self) -> Vec<&str> {
        self.names(|o| o.status != InstallStatus::Succeeded)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn names(&self, keep: impl Fn(&InstallOutcome) -> bool) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|o| keep(o))
            .map(|o| o.tool.as_str())
            .collect()
    }
}
