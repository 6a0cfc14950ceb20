//! Run report and final summary.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::detection::Environment;
use crate::install::Outcomes;
use crate::ui::UserInterface;
use crate::verify::VerificationReport;
use crate::workspace::CredentialsStatus;

/// Everything a run did, for the summary.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Detected host environment.
    pub environment: Environment,
    /// Whether the environment has a tool catalog.
    pub supported: bool,
    /// Python package outcomes.
    pub python: Outcomes,
    /// System tool outcomes.
    pub tools: Outcomes,
    /// Post-run verification.
    pub verification: VerificationReport,
    /// Credentials file path, relative to the project.
    pub credentials_file: PathBuf,
    /// What happened to the credentials file (`None` on a dry run).
    #[serde(skip)]
    pub credentials: Option<CredentialsStatus>,
    /// Why the output tree or credentials file could not be prepared.
    pub workspace_error: Option<String>,
    /// Nothing was executed or written.
    pub dry_run: bool,
}

impl RunReport {
    /// Whether every install succeeded and nothing is missing.
    pub fn is_clean(&self) -> bool {
        self.python.failed_or_skipped().is_empty()
            && self.tools.failed_or_skipped().is_empty()
            && self.verification.is_complete()
            && self.workspace_error.is_none()
    }
}

fn join_or_none<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let joined = items.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

fn join_set(set: &BTreeSet<String>) -> String {
    join_or_none(set.iter().map(String::as_str))
}

/// Print the final summary.
pub fn render_summary(report: &RunReport, ui: &mut dyn UserInterface) {
    ui.show_header("INSTALLATION SUMMARY");

    if report.dry_run {
        ui.message("Dry run: nothing was installed or written.");
    }
    ui.message(&format!("Environment: {}", report.environment));

    let python_ok = report.python.succeeded();
    let python_bad = report.python.failed_or_skipped();
    if !python_ok.is_empty() {
        ui.success(&format!("Python packages installed: {}", python_ok.join(", ")));
    }
    if !python_bad.is_empty() {
        ui.error(&format!("Python packages not installed: {}", python_bad.join(", ")));
    }

    if report.supported {
        let ok = report.tools.succeeded();
        let bad = report.tools.failed_or_skipped();
        ui.success(&format!("Successfully installed: {}", join_or_none(ok)));
        if !bad.is_empty() {
            ui.error(&format!("Failed or skipped: {}", bad.join(", ")));
        }
    } else {
        ui.warning("System tools were not installed on this platform.");
    }

    let v = &report.verification;
    ui.message(&format!("Available tools: {}", join_set(&v.available_tools)));
    if !v.missing_tools.is_empty() {
        ui.warning(&format!("Missing tools: {}", join_set(&v.missing_tools)));
    }
    ui.message(&format!("Available modules: {}", join_set(&v.available_modules)));
    if !v.missing_modules.is_empty() {
        ui.warning(&format!("Missing modules: {}", join_set(&v.missing_modules)));
    }

    if let Some(err) = &report.workspace_error {
        ui.error(&format!("Workspace not prepared: {}", err));
    }

    if !report.dry_run {
        ui.show_hint(&format!(
            "Add your OpenAI API key to {} before running the tools.",
            report.credentials_file.display()
        ));
    }
}
