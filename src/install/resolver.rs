//! Tool catalog resolver.
//!
//! Turns catalog entries into concrete commands. Package entries walk the
//! chain: official repository first, then each community helper in
//! priority order, then give up with an advisory.

use crate::catalog::{Catalog, PackageManagerDef, Source, ToolSpec};
use crate::detection::{Environment, Probe};
use crate::shell::ProcessRunner;

use super::resolved::ResolvedInstall;

/// Resolves [`ToolSpec`]s against a detected environment.
pub struct Resolver<'a> {
    catalog: &'a Catalog,
    environment: Environment,
    probe: &'a dyn Probe,
    runner: &'a dyn ProcessRunner,
    helpers: Option<Vec<String>>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver.
    pub fn new(
        catalog: &'a Catalog,
        environment: Environment,
        probe: &'a dyn Probe,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self {
            catalog,
            environment,
            probe,
            runner,
            helpers: None,
        }
    }

    /// Replace the catalog's community-helper priority list.
    pub fn with_helpers(mut self, helpers: Option<Vec<String>>) -> Self {
        self.helpers = helpers;
        self
    }

    /// The environment being resolved against.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Resolve every tool of the active catalog variant, in catalog order.
    ///
    /// Returns `None` when the environment has no catalog.
    pub fn resolve_all(&self) -> Option<Vec<ResolvedInstall>> {
        let tools = self.catalog.tools_for(&self.environment)?;
        Some(tools.iter().map(|tool| self.resolve(tool)).collect())
    }

    /// Resolve a single tool.
    pub fn resolve(&self, spec: &ToolSpec) -> ResolvedInstall {
        let resolved = match &spec.source {
            Source::Command(command) => {
                tracing::debug!("{}: fixed command", spec.name);
                ResolvedInstall::direct(&spec.name, command)
            }
            Source::Package(package) => self.resolve_package(&spec.name, package),
        };
        resolved.with_toolchain(spec.toolchain.as_deref())
    }

    fn resolve_package(&self, tool: &str, package: &str) -> ResolvedInstall {
        let Some(manager) = self.catalog.package_manager_for(&self.environment) else {
            tracing::warn!("{}: no package manager known for {}", tool, self.environment);
            let advisory = format!(
                "No package manager known for {}; install {} manually",
                self.environment, package
            );
            return ResolvedInstall::unresolved(tool, advisory);
        };

        if self.in_official_repository(manager, package) {
            tracing::debug!("{}: found in official repository", tool);
            return ResolvedInstall::official(tool, manager.install_command(package));
        }

        let helpers = self.helper_list(manager);
        if let Some(helper) = helpers.iter().find(|h| self.probe.is_available(h)) {
            tracing::debug!("{}: using community helper {}", tool, helper);
            return ResolvedInstall::helper(
                tool,
                helper,
                manager.helper_install_command(helper, package),
            );
        }

        let advisory = unresolved_advisory(package, helpers);
        tracing::warn!("{}: {}", tool, advisory);
        ResolvedInstall::unresolved(tool, advisory)
    }

    /// A missing manager executable and a failed query both mean "not in
    /// the official repository"; the former is logged separately.
    fn in_official_repository(&self, manager: &PackageManagerDef, package: &str) -> bool {
        if !self.probe.is_available(&manager.manager) {
            tracing::warn!(
                "{} not found on PATH; skipping official repository lookup",
                manager.manager
            );
            return false;
        }
        self.runner.succeeds(&manager.query_command(package))
    }

    fn helper_list<'m>(&'m self, manager: &'m PackageManagerDef) -> &'m [String] {
        self.helpers.as_deref().unwrap_or(&manager.helpers)
    }
}

fn unresolved_advisory(package: &str, helpers: &[String]) -> String {
    match helpers {
        [] => format!("{} is not in the official repository; install it manually", package),
        [only] => format!(
            "{} is not in the official repository and no helper is installed; install {} or install {} manually",
            package, only, package
        ),
        [first, second, ..] => format!(
            "{} is not in the official repository and no helper is installed; install {} or {}, or install {} manually",
            package, first, second, package
        ),
    }
}
