use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{HarmonogramError, Result};
use crate::generate::GeneratedPath;

pub fn schedule_dir(root: &Path, path: &GeneratedPath) -> PathBuf {
    root.join(path.relative())
}

/// Creates the directory for every path under `root`, ancestors included.
/// Directories that already exist are left alone.
pub fn ensure(root: &Path, paths: &[GeneratedPath]) -> Result<Vec<PathBuf>> {
    paths
        .iter()
        .map(|path| {
            let dir = schedule_dir(root, path);
            fs::create_dir_all(&dir).map_err(|err| HarmonogramError::io(&dir, err))?;
            debug!(target: "harmonogram::materialize", dir = ?dir, "directory ready");
            Ok(dir)
        })
        .collect()
}
