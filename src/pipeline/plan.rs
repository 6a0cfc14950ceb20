//! Install plans: what a run would do, without prompting or executing.

use serde::Serialize;

use crate::detection::Environment;
use crate::install::{Precheck, ResolvedInstall};

/// One resolved tool and the gate rule it would hit.
#[derive(Debug, Clone)]
pub struct PlanEntry {
    pub resolved: ResolvedInstall,
    pub toolchain_available: bool,
    pub precheck: Precheck,
}

impl PlanEntry {
    /// Short label for the gate outcome.
    pub fn status_label(&self) -> String {
        match self.precheck {
            Precheck::Ready => "run".to_string(),
            Precheck::NeedsConfirmation => "run after confirmation".to_string(),
            Precheck::Skip(decision) => format!("skip ({})", decision),
        }
    }
}

/// The full plan for an environment.
#[derive(Debug, Clone)]
pub struct Plan {
    pub environment: Environment,
    /// `<python> -m pip install` commands, in order.
    pub python: Vec<ResolvedInstall>,
    /// `None` when the environment has no catalog.
    pub tools: Option<Vec<PlanEntry>>,
}

/// Serializable view of a plan entry.
#[derive(Debug, Serialize)]
pub struct PlanRow<'a> {
    pub tool: &'a str,
    pub command: &'a str,
    pub via: String,
    pub status: String,
}

impl Plan {
    /// Rows for display, Python packages first.
    pub fn rows(&self) -> Vec<PlanRow<'_>> {
        let python = self.python.iter().map(|r| PlanRow {
            tool: &r.tool,
            command: &r.command,
            via: "pip".to_string(),
            status: "run".to_string(),
        });
        let tools = self.tools.iter().flatten().map(|e| PlanRow {
            tool: &e.resolved.tool,
            command: &e.resolved.command,
            via: e.resolved.via.to_string(),
            status: e.status_label(),
        });
        python.chain(tools).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{Distro, OsFamily};
    use crate::install::GateDecision;

    #[test]
    fn labels_follow_precheck() {
        let entry = |precheck| PlanEntry {
            resolved: ResolvedInstall::direct("tree", "sudo apt-get install -y tree"),
            toolchain_available: true,
            precheck,
        };
        assert_eq!(entry(Precheck::Ready).status_label(), "run");
        assert_eq!(
            entry(Precheck::NeedsConfirmation).status_label(),
            "run after confirmation"
        );
        assert_eq!(
            entry(Precheck::Skip(GateDecision::SkipMissingToolchain)).status_label(),
            "skip (missing toolchain)"
        );
    }

    #[test]
    fn rows_put_python_first() {
        let plan = Plan {
            environment: Environment::new(OsFamily::Linux, Distro::Debian),
            python: vec![ResolvedInstall::direct("psutil", "python3 -m pip install psutil")],
            tools: Some(vec![PlanEntry {
                resolved: ResolvedInstall::direct("tree", "sudo apt-get install -y tree"),
                toolchain_available: true,
                precheck: Precheck::NeedsConfirmation,
            }]),
        };
        let rows = plan.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tool, "psutil");
        assert_eq!(rows[0].via, "pip");
        assert_eq!(rows[1].via, "direct");
    }

    #[test]
    fn unsupported_plan_has_only_python_rows() {
        let plan = Plan {
            environment: Environment::new(OsFamily::Other, Distro::Unknown),
            python: vec![],
            tools: None,
        };
        assert!(plan.rows().is_empty());
    }
}
