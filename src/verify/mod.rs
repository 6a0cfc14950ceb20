//! Post-run verification.
//!
//! Re-probes the expected executables and Python modules and partitions
//! each list into available and missing. Nothing here is fatal.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::detection::Probe;
use crate::shell::ProcessRunner;

/// Available/missing partition of the expected tools and modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub available_tools: BTreeSet<String>,
    pub missing_tools: BTreeSet<String>,
    pub available_modules: BTreeSet<String>,
    pub missing_modules: BTreeSet<String>,
}

impl VerificationReport {
    /// Whether everything expected was found.
    pub fn is_complete(&self) -> bool {
        self.missing_tools.is_empty() && self.missing_modules.is_empty()
    }
}

/// Checks local state against expectations.
pub struct Verifier<'a> {
    probe: &'a dyn Probe,
    runner: &'a dyn ProcessRunner,
    python: &'a str,
}

impl<'a> Verifier<'a> {
    pub fn new(probe: &'a dyn Probe, runner: &'a dyn ProcessRunner, python: &'a str) -> Self {
        Self {
            probe,
            runner,
            python,
        }
    }

    /// Partition `tools` and `modules` into available and missing.
    pub fn verify(&self, tools: &[String], modules: &[String]) -> VerificationReport {
        let mut report = VerificationReport::default();

        for tool in tools {
            if self.probe.is_available(tool) {
                report.available_tools.insert(tool.clone());
            } else {
                report.missing_tools.insert(tool.clone());
            }
        }

        for module in modules {
            if self.module_importable(module) {
                report.available_modules.insert(module.clone());
            } else {
                report.missing_modules.insert(module.clone());
            }
        }

        tracing::debug!(
            "verified: {} tools missing, {} modules missing",
            report.missing_tools.len(),
            report.missing_modules.len()
        );
        report
    }

    fn module_importable(&self, module: &str) -> bool {
        if !is_module_path(module) {
            tracing::warn!("'{}' is not a valid module name", module);
            return false;
        }
        self.runner.succeeds(&import_check_command(self.python, module))
    }
}

/// Command that exits zero when `module` imports.
pub fn import_check_command(python: &str, module: &str) -> String {
    format!("{} -c \"import {}\"", python, module)
}

/// Dotted Python identifier, e.g. `os.path`. Anything else never reaches
/// the shell.
fn is_module_path(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
                && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::StaticProbe;
    use crate::error::Result;
    use crate::shell::CommandResult;

    struct ImportRunner {
        importable: Vec<&'static str>,
    }

    impl ProcessRunner for ImportRunner {
        fn run(&self, _command: &str) -> Result<CommandResult> {
            Ok(CommandResult::from_code(0))
        }

        fn succeeds(&self, command: &str) -> bool {
            self.importable
                .iter()
                .any(|m| command == import_check_command("python3", m))
        }
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn partitions_tools_and_modules() {
        let probe = StaticProbe::new(["whois", "tree"]);
        let runner = ImportRunner {
            importable: vec!["psutil"],
        };
        let verifier = Verifier::new(&probe, &runner, "python3");

        let report = verifier.verify(
            &names(&["whois", "nuclei", "tree"]),
            &names(&["openai", "psutil"]),
        );

        assert_eq!(report.available_tools, BTreeSet::from(["tree".into(), "whois".into()]));
        assert_eq!(report.missing_tools, BTreeSet::from(["nuclei".into()]));
        assert_eq!(report.available_modules, BTreeSet::from(["psutil".into()]));
        assert_eq!(report.missing_modules, BTreeSet::from(["openai".into()]));
        assert!(!report.is_complete());
    }

    #[test]
    fn partition_invariant_holds_for_all_subsets() {
        let universe = ["whois", "subfinder", "katana", "httpx", "gau"];
        let probe = StaticProbe::new(["subfinder", "gau"]);
        let runner = ImportRunner { importable: vec![] };
        let verifier = Verifier::new(&probe, &runner, "python3");

        for mask in 0u32..(1 << universe.len()) {
            let expected: Vec<String> = universe
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, t)| t.to_string())
                .collect();
            let report = verifier.verify(&expected, &[]);

            assert!(report.available_tools.is_disjoint(&report.missing_tools));
            let union: BTreeSet<String> = report
                .available_tools
                .union(&report.missing_tools)
                .cloned()
                .collect();
            assert_eq!(union, expected.iter().cloned().collect::<BTreeSet<_>>());
        }
    }

    #[test]
    fn empty_expectations_are_complete() {
        let probe = StaticProbe::default();
        let runner = ImportRunner { importable: vec![] };
        let report = Verifier::new(&probe, &runner, "python3").verify(&[], &[]);
        assert!(report.is_complete());
    }

    #[test]
    fn invalid_module_names_are_missing_without_running() {
        let probe = StaticProbe::default();
        let runner = ImportRunner {
            importable: vec!["os; rm -rf ~"],
        };
        let report =
            Verifier::new(&probe, &runner, "python3").verify(&[], &names(&["os; rm -rf ~"]));
        assert!(report.missing_modules.contains("os; rm -rf ~"));
    }

    #[test]
    fn module_path_rules() {
        assert!(is_module_path("openai"));
        assert!(is_module_path("os.path"));
        assert!(is_module_path("_private"));
        assert!(!is_module_path(""));
        assert!(!is_module_path("1abc"));
        assert!(!is_module_path("a..b"));
        assert!(!is_module_path("foo-bar"));
    }

    #[test]
    fn import_command_shape() {
        assert_eq!(
            import_check_command("python3", "psutil"),
            "python3 -c \"import psutil\""
        );
    }
}
