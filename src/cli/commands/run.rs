//! Run command implementation.
//!
//! The `outfit run` command installs Python packages and system tools,
//! prepares the output tree and verifies the result.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::detection::PathProbe;
use crate::error::{OutfitError, Result};
use crate::pipeline::{render_summary, Provisioner, RunOptions};
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

use super::context::Context;
use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = Context::load(&self.project_root, self.config_path.as_deref())?;
        let probe = PathProbe::from_env();
        let runner = SystemRunner;
        let options = RunOptions {
            dry_run: self.args.dry_run,
        };

        let provisioner =
            Provisioner::new(&ctx.config, &ctx.catalog, &probe, &runner, &ctx.project_root);
        match provisioner.run(ui, options) {
            Ok(report) => {
                render_summary(&report, ui);
                if report.is_clean() {
                    ui.success("Setup complete!");
                }
                Ok(CommandResult::success())
            }
            Err(OutfitError::Aborted) => {
                ui.warning(&OutfitError::Aborted.to_string());
                Ok(CommandResult::success())
            }
            Err(e) => Err(e),
        }
    }
}
