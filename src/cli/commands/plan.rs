//! Plan command implementation.
//!
//! The `outfit plan` command resolves every tool and shows the command
//! and gate outcome, without prompting or installing anything.

use std::path::{Path, PathBuf};

use crate::cli::args::PlanArgs;
use crate::detection::PathProbe;
use crate::error::{OutfitError, Result};
use crate::pipeline::Provisioner;
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

use super::context::Context;
use super::dispatcher::{Command, CommandResult};

/// The plan command implementation.
pub struct PlanCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: PlanArgs,
}

impl PlanCommand {
    /// Create a new plan command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: PlanArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for PlanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = Context::load(&self.project_root, self.config_path.as_deref())?;
        let probe = PathProbe::from_env();
        let runner = SystemRunner;

        let plan = Provisioner::new(&ctx.config, &ctx.catalog, &probe, &runner, &ctx.project_root)
            .plan();
        let rows = plan.rows();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&rows).map_err(|e| OutfitError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Install plan for {}", plan.environment));
        for row in &rows {
            ui.message(&format!("{:<14} {:<24} {}", row.tool, row.status, row.via));
            if !row.command.is_empty() {
                ui.message(&format!("{:<14} {}", "", row.command));
            }
        }
        if plan.tools.is_none() {
            ui.warning(&format!(
                "No tool catalog for {}; only Python packages would be installed",
                plan.environment
            ));
        }
        for entry in plan.tools.iter().flatten() {
            if let Some(advisory) = &entry.resolved.advisory {
                ui.show_hint(advisory);
            }
        }

        Ok(CommandResult::success())
    }
}
