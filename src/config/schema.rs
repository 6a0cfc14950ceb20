//! Configuration schema.

use std::path::PathBuf;

use serde::Deserialize;

/// Output subdirectories created under `output_root`.
pub const DEFAULT_OUTPUT_DIRS: [&str; 12] = [
    "enumeration",
    "information",
    "crawling",
    "pathfinder",
    "sslscan",
    "vulnerability",
    "takeover",
    "httpx",
    "gau",
    "amass",
    "technologies",
    "daily_hunt",
];

/// Executables expected on PATH after a run.
pub const DEFAULT_EXPECTED_TOOLS: [&str; 12] = [
    "whois",
    "subfinder",
    "assetfinder",
    "katana",
    "waybackurls",
    "httpx",
    "nuclei",
    "subjack",
    "gau",
    "amass",
    "whatweb",
    "tree",
];

/// Python packages installed first and checked by import afterwards.
pub const DEFAULT_PYTHON_PACKAGES: [&str; 2] = ["openai", "psutil"];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Root configuration (`.outfit.yml`).
///
/// Every field is optional; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutfitConfig {
    /// Banner title.
    pub app_name: String,

    /// Directory (relative to the project) holding the output tree.
    pub output_root: PathBuf,

    /// Subdirectories of `output_root` to create.
    pub output_dirs: Vec<String>,

    /// Credentials file created empty if absent.
    pub credentials_file: PathBuf,

    /// Python interpreter used for pip installs and import checks.
    pub python: String,

    /// Packages installed with `<python> -m pip install`.
    pub python_packages: Vec<String>,

    /// Executables checked after the run.
    pub expected_tools: Vec<String>,

    /// Python modules checked after the run.
    pub expected_modules: Vec<String>,

    /// Community-helper priority list replacing the catalog's.
    pub helpers: Option<Vec<String>>,

    /// Tool catalog replacing the built-in one.
    pub catalog: Option<PathBuf>,
}

impl Default for OutfitConfig {
    fn default() -> Self {
        Self {
            app_name: "ENIGMA CLI".to_string(),
            output_root: PathBuf::from("output"),
            output_dirs: strings(&DEFAULT_OUTPUT_DIRS),
            credentials_file: PathBuf::from("openai_apikey.txt"),
            python: "python3".to_string(),
            python_packages: strings(&DEFAULT_PYTHON_PACKAGES),
            expected_tools: strings(&DEFAULT_EXPECTED_TOOLS),
            expected_modules: strings(&DEFAULT_PYTHON_PACKAGES),
            helpers: None,
            catalog: None,
        }
    }
}
