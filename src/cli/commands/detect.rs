//! Detect command implementation.
//!
//! The `outfit detect` command shows the environment a run would
//! provision and which catalog it would use.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::CatalogKey;
use crate::cli::args::DetectArgs;
use crate::detection::{Environment, EnvironmentDetector, PathProbe};
use crate::error::{OutfitError, Result};
use crate::ui::UserInterface;

use super::context::Context;
use super::dispatcher::{Command, CommandResult};

#[derive(Debug, Serialize)]
struct Detection {
    #[serde(flatten)]
    environment: Environment,
    catalog: Option<CatalogKey>,
    package_manager: Option<String>,
}

/// The detect command implementation.
pub struct DetectCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: DetectArgs,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: DetectArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = Context::load(&self.project_root, self.config_path.as_deref())?;
        let probe = PathProbe::from_env();
        let environment = EnvironmentDetector::new(&probe).detect();

        let detection = Detection {
            environment,
            catalog: CatalogKey::for_environment(&environment)
                .filter(|key| ctx.catalog.variant(*key).is_some()),
            package_manager: ctx
                .catalog
                .package_manager_for(&environment)
                .map(|pm| pm.manager.clone()),
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&detection)
                .map_err(|e| OutfitError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.message(&format!("Operating system: {}", detection.environment.os_family));
        ui.message(&format!("Distribution:     {}", detection.environment.distro));
        match detection.catalog {
            Some(key) => ui.message(&format!("Catalog:          {}", key)),
            None => ui.warning("No tool catalog for this system"),
        }
        if let Some(manager) = &detection.package_manager {
            ui.message(&format!("Package manager:  {}", manager));
        }

        Ok(CommandResult::success())
    }
}
