//! Output directory tree and credentials file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// What happened to the credentials file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsStatus {
    Created,
    AlreadyExists,
}

/// Create `<root>/<base>/<subdir>` for each subdirectory.
///
/// Idempotent. Returns every directory path, existing or new.
pub fn create_output_dirs(root: &Path, base: &Path, subdirs: &[String]) -> Result<Vec<PathBuf>> {
    let base = root.join(base);
    let mut paths = Vec::with_capacity(subdirs.len());
    for subdir in subdirs {
        let path = base.join(subdir);
        fs::create_dir_all(&path)?;
        tracing::debug!("ensured {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}

/// Create an empty credentials file unless one already exists.
pub fn ensure_credentials_file(root: &Path, name: &Path) -> Result<CredentialsStatus> {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(_) => {
            tracing::debug!("created {}", path.display());
            Ok(CredentialsStatus::Created)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(CredentialsStatus::AlreadyExists),
        Err(e) => Err(e.into()),
    }
}
