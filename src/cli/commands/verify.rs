//! Verify command implementation.
//!
//! The `outfit verify` command checks the expected tools and Python
//! modules without installing anything. Exits 1 when something is missing.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::cli::args::VerifyArgs;
use crate::detection::PathProbe;
use crate::error::{OutfitError, Result};
use crate::shell::SystemRunner;
use crate::ui::UserInterface;
use crate::verify::Verifier;

use super::context::Context;
use super::dispatcher::{Command, CommandResult};

/// The verify command implementation.
pub struct VerifyCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: VerifyArgs,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: VerifyArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

fn list(set: &BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = Context::load(&self.project_root, self.config_path.as_deref())?;
        let probe = PathProbe::from_env();
        let runner = SystemRunner;

        let report = Verifier::new(&probe, &runner, &ctx.config.python)
            .verify(&ctx.config.expected_tools, &ctx.config.expected_modules);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| OutfitError::Other(e.into()))?;
            ui.message(&json);
        } else {
            if !report.available_tools.is_empty() {
                ui.success(&format!("Tools: {}", list(&report.available_tools)));
            }
            if !report.missing_tools.is_empty() {
                ui.warning(&format!("Missing tools: {}", list(&report.missing_tools)));
            }
            if !report.available_modules.is_empty() {
                ui.success(&format!("Modules: {}", list(&report.available_modules)));
            }
            if !report.missing_modules.is_empty() {
                ui.warning(&format!("Missing modules: {}", list(&report.missing_modules)));
            }
        }

        if report.is_complete() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
