//! End-to-end provisioning run.
//!
//! Phases run strictly in sequence:
//! 1. initial `proceed` confirmation (declining ends the run untouched)
//! 2. Python packages
//! 3. detect, resolve, gate and install system tools in catalog order
//! 4. output directories and credentials file
//! 5. verification
//!
//! Only the first phase can stop the run. Every per-tool problem is
//! recorded as an outcome, and a workspace failure is recorded on the
//! report; the run moves on either way.

pub mod plan;
pub mod report;

pub use plan::{Plan, PlanEntry, PlanRow};
pub use report::{render_summary, RunReport};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::config::OutfitConfig;
use crate::detection::{Environment, EnvironmentDetector, Probe};
use crate::error::{OutfitError, Result};
use crate::install::{
    execute, gate, precheck, GateDecision, InstallOutcome, InstallStatus, Outcomes, Precheck,
    ResolvedInstall, Resolver, SkipReason,
};
use crate::shell::ProcessRunner;
use crate::ui::{Prompt, UserInterface};
use crate::verify::Verifier;
use crate::workspace::{create_output_dirs, ensure_credentials_file, CredentialsStatus};

/// Options for a provisioning run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Resolve and gate without executing anything or writing files.
    pub dry_run: bool,
}

/// The initial confirmation gating the whole run.
pub fn proceed_prompt() -> Prompt {
    Prompt::confirm(
        "proceed",
        "Do you want to proceed with the installation?",
        true,
    )
}

/// `<python> -m pip install <package>`.
pub fn pip_install(python: &str, package: &str) -> ResolvedInstall {
    ResolvedInstall::direct(package, &format!("{} -m pip install {}", python, package))
}

/// Wires detection, resolution, gating, execution and verification.
pub struct Provisioner<'a> {
    config: &'a OutfitConfig,
    catalog: &'a Catalog,
    probe: &'a dyn Probe,
    runner: &'a dyn ProcessRunner,
    project_root: PathBuf,
    environment: Option<Environment>,
}

impl<'a> Provisioner<'a> {
    pub fn new(
        config: &'a OutfitConfig,
        catalog: &'a Catalog,
        probe: &'a dyn Probe,
        runner: &'a dyn ProcessRunner,
        project_root: &Path,
    ) -> Self {
        Self {
            config,
            catalog,
            probe,
            runner,
            project_root: project_root.to_path_buf(),
            environment: None,
        }
    }

    /// Use a fixed environment instead of detecting the host.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// The environment to provision.
    pub fn environment(&self) -> Environment {
        match self.environment {
            Some(env) => env,
            None => EnvironmentDetector::new(self.probe).detect(),
        }
    }

    fn resolver(&self, environment: Environment) -> Resolver<'a> {
        Resolver::new(self.catalog, environment, self.probe, self.runner)
            .with_helpers(self.config.helpers.clone())
    }

    /// Resolve everything and apply the non-interactive gate rules.
    ///
    /// Runs repository metadata queries but never installs or prompts.
    pub fn plan(&self) -> Plan {
        let environment = self.environment();
        let python = self
            .config
            .python_packages
            .iter()
            .map(|p| pip_install(&self.config.python, p))
            .collect();

        let mut toolchains = ToolchainCache::default();
        let tools = self.resolver(environment).resolve_all().map(|resolved| {
            resolved
                .into_iter()
                .map(|r| {
                    let toolchain_available = toolchains.available(&r, self.probe);
                    let precheck = precheck(&r, toolchain_available);
                    PlanEntry {
                        resolved: r,
                        toolchain_available,
                        precheck,
                    }
                })
                .collect()
        });

        Plan {
            environment,
            python,
            tools,
        }
    }

    /// Run the full pipeline.
    ///
    /// Returns `Err(Aborted)` when the operator declines the initial
    /// confirmation. Nothing has been touched at that point.
    pub fn run(&self, ui: &mut dyn UserInterface, options: RunOptions) -> Result<RunReport> {
        ui.show_header(&self.config.app_name);

        if !ui.confirm(&proceed_prompt())? {
            tracing::info!("operator declined the run");
            return Err(OutfitError::Aborted);
        }

        let python = self.install_python_packages(ui, options);

        let environment = self.environment();
        ui.message(&format!("Detected environment: {}", environment));
        let (supported, tools) = self.install_system_tools(environment, ui, options);

        let (credentials, workspace_error) = if options.dry_run {
            (None, None)
        } else {
            match self.prepare_workspace(ui) {
                Ok(status) => (Some(status), None),
                Err(e) => {
                    tracing::warn!("workspace setup failed: {}", e);
                    ui.error(&format!("Could not prepare the workspace: {}", e));
                    (None, Some(e.to_string()))
                }
            }
        };

        ui.message("Verifying installation...");
        let verification = Verifier::new(self.probe, self.runner, &self.config.python)
            .verify(&self.config.expected_tools, &self.config.expected_modules);

        Ok(RunReport {
            environment,
            supported,
            python,
            tools,
            verification,
            credentials_file: self.config.credentials_file.clone(),
            credentials,
            workspace_error,
            dry_run: options.dry_run,
        })
    }

    fn install_python_packages(&self, ui: &mut dyn UserInterface, options: RunOptions) -> Outcomes {
        let mut outcomes = Outcomes::new();
        if self.config.python_packages.is_empty() {
            return outcomes;
        }

        ui.message("Installing Python packages...");
        for package in &self.config.python_packages {
            let install = pip_install(&self.config.python, package);
            if options.dry_run {
                ui.message(&format!("Would run: {}", install.command));
                outcomes.record(InstallOutcome::skipped(package, SkipReason::DryRun));
                continue;
            }
            let outcome = execute(&install, self.runner);
            report_outcome(ui, &outcome);
            outcomes.record(outcome);
        }
        outcomes
    }

    fn install_system_tools(
        &self,
        environment: Environment,
        ui: &mut dyn UserInterface,
        options: RunOptions,
    ) -> (bool, Outcomes) {
        let mut outcomes = Outcomes::new();
        let resolver = self.resolver(environment);

        let Some(tool_count) = self.catalog.tools_for(&environment).map(<[_]>::len) else {
            let err = OutfitError::UnsupportedPlatform {
                os: environment.to_string(),
            };
            tracing::warn!("{}", err);
            ui.warning(&format!("{}; skipping system tools", err));
            return (false, outcomes);
        };

        let mut spinner = ui.start_spinner(&format!("Resolving {} tools...", tool_count));
        let resolved = resolver.resolve_all().unwrap_or_default();
        let unresolved = resolved.iter().filter(|r| !r.resolvable).count();
        if unresolved == 0 {
            spinner.finish_success(&format!("Resolved {} tools", resolved.len()));
        } else {
            spinner.finish_error(&format!(
                "Resolved {} of {} tools",
                resolved.len() - unresolved,
                resolved.len()
            ));
        }

        let mut toolchains = ToolchainCache::default();
        for install in &resolved {
            let toolchain_available = toolchains.available(install, self.probe);
            let decision = if options.dry_run {
                match precheck(install, toolchain_available) {
                    Precheck::Skip(decision) => decision,
                    Precheck::Ready | Precheck::NeedsConfirmation => GateDecision::Proceed,
                }
            } else {
                gate(install, toolchain_available, ui)
            };

            let outcome = match SkipReason::from_decision(decision) {
                Some(reason) => {
                    report_skip(ui, install, reason);
                    InstallOutcome::skipped(&install.tool, reason)
                }
                None if options.dry_run => {
                    ui.message(&format!("Would run: {}", install.command));
                    InstallOutcome::skipped(&install.tool, SkipReason::DryRun)
                }
                None => {
                    ui.message(&format!("Installing {}...", install.tool));
                    let outcome = execute(install, self.runner);
                    report_outcome(ui, &outcome);
                    outcome
                }
            };
            outcomes.record(outcome);
        }

        (true, outcomes)
    }

    fn prepare_workspace(&self, ui: &mut dyn UserInterface) -> Result<CredentialsStatus> {
        let dirs = create_output_dirs(
            &self.project_root,
            &self.config.output_root,
            &self.config.output_dirs,
        )?;
        ui.success(&format!(
            "Output directories ready under {}/ ({} directories)",
            self.config.output_root.display(),
            dirs.len()
        ));

        let status = ensure_credentials_file(&self.project_root, &self.config.credentials_file)?;
        let name = self.config.credentials_file.display();
        match status {
            CredentialsStatus::Created => ui.success(&format!("Created {}", name)),
            CredentialsStatus::AlreadyExists => ui.message(&format!("{} already exists", name)),
        }
        Ok(status)
    }
}

/// Remembers toolchain probes so each toolchain is looked up once.
#[derive(Debug, Default)]
struct ToolchainCache {
    seen: BTreeMap<String, bool>,
}

impl ToolchainCache {
    /// Whether the install's toolchain is present. Installs without one
    /// always report true.
    fn available(&mut self, install: &ResolvedInstall, probe: &dyn Probe) -> bool {
        let Some(toolchain) = install.toolchain.as_deref() else {
            return true;
        };
        *self
            .seen
            .entry(toolchain.to_string())
            .or_insert_with(|| probe.is_available(toolchain))
    }
}

fn report_outcome(ui: &mut dyn UserInterface, outcome: &InstallOutcome) {
    match outcome.status {
        InstallStatus::Succeeded => ui.success(&format!("{} installed", outcome.tool)),
        _ => ui.error(&format!("{} failed to install", outcome.tool)),
    }
}

fn report_skip(ui: &mut dyn UserInterface, install: &ResolvedInstall, reason: SkipReason) {
    match reason {
        SkipReason::Unresolved => {
            let advisory = install.advisory.as_deref().unwrap_or("no installation source");
            ui.warning(&format!("Skipping {}: {}", install.tool, advisory));
        }
        SkipReason::MissingToolchain => ui.warning(&format!(
            "Skipping {}: {} is not installed",
            install.tool,
            install.toolchain.as_deref().unwrap_or("toolchain")
        )),
        SkipReason::Declined => ui.message(&format!("Skipping {}", install.tool)),
        SkipReason::DryRun => {}
    }
}
