use crate::domain::models::CleanReport;
use anyhow::Context;
use log::{debug, info};
use std::path::Path;

/// Directories produced by tox runs, virtualenv setup, and charm builds.
pub const CLEAN_DIRS: &[&str] = &[".tox", "venv", "build", "out"];

/// Remove the fixed build directories under `workdir`.
///
/// Absent directories are skipped, never an error, so the operation is
/// idempotent: a second run removes nothing and reports everything skipped.
pub fn clean_build_dirs(workdir: &Path, dry_run: bool) -> anyhow::Result<CleanReport> {
    let mut removed = Vec::new();
    let mut skipped = Vec::new();
    for name in CLEAN_DIRS {
        let dir = workdir.join(name);
        if !dir.is_dir() {
            skipped.push(name.to_string());
            continue;
        }
        if dry_run {
            info!("would remove {}", dir.display());
        } else {
            std::fs::remove_dir_all(&dir)
                .with_context(|| format!("removing {}", dir.display()))?;
            debug!("removed {}", dir.display());
        }
        removed.push(name.to_string());
    }
    Ok(CleanReport {
        removed,
        skipped,
        dry_run,
    })
}
