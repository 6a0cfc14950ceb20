//! Execution policy gate.
//!
//! Rules are checked in order, and the two skip rules run before any
//! prompt so the operator is never asked about an install that cannot
//! run.

use std::fmt;

use crate::ui::{Prompt, UserInterface};

use super::resolved::ResolvedInstall;

/// What the gate decided for one resolved install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Run the command.
    Proceed,
    /// The operator declined the elevated install.
    SkipConfirmationDeclined,
    /// No installation source was found.
    SkipUnresolved,
    /// The required toolchain is not on PATH.
    SkipMissingToolchain,
}

impl GateDecision {
    /// Whether the command may run.
    pub fn proceeds(&self) -> bool {
        matches!(self, GateDecision::Proceed)
    }
}

impl fmt::Display for GateDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GateDecision::Proceed => "proceed",
            GateDecision::SkipConfirmationDeclined => "declined",
            GateDecision::SkipUnresolved => "unresolved",
            GateDecision::SkipMissingToolchain => "missing toolchain",
        };
        f.write_str(text)
    }
}

/// Outcome of the non-interactive rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precheck {
    /// Skip without asking.
    Skip(GateDecision),
    /// Elevated install; ask the operator.
    NeedsConfirmation,
    /// Run without asking.
    Ready,
}

/// Apply the rules that need no operator input.
pub fn precheck(resolved: &ResolvedInstall, toolchain_available: bool) -> Precheck {
    if !resolved.resolvable {
        return Precheck::Skip(GateDecision::SkipUnresolved);
    }
    if resolved.requires_prerequisite_toolchain && !toolchain_available {
        return Precheck::Skip(GateDecision::SkipMissingToolchain);
    }
    if resolved.requires_elevated_privilege {
        return Precheck::NeedsConfirmation;
    }
    Precheck::Ready
}

/// Prompt asked before an elevated install of `tool`.
pub fn elevation_prompt(tool: &str) -> Prompt {
    Prompt::confirm(
        format!("elevate_{}", tool),
        format!("Do you want to install {} with sudo?", tool),
        false,
    )
}

/// Decide whether a resolved install may run.
///
/// A prompt that cannot be answered (closed stdin, no TTY) counts as a
/// decline.
pub fn gate(
    resolved: &ResolvedInstall,
    toolchain_available: bool,
    ui: &mut dyn UserInterface,
) -> GateDecision {
    let decision = match precheck(resolved, toolchain_available) {
        Precheck::Skip(decision) => decision,
        Precheck::Ready => GateDecision::Proceed,
        Precheck::NeedsConfirmation => match ui.confirm(&elevation_prompt(&resolved.tool)) {
            Ok(true) => GateDecision::Proceed,
            Ok(false) => GateDecision::SkipConfirmationDeclined,
            Err(e) => {
                tracing::warn!("confirmation for {} failed: {}", resolved.tool, e);
                GateDecision::SkipConfirmationDeclined
            }
        },
    };
    tracing::debug!("gate {}: {}", resolved.tool, decision);
    decision
}
