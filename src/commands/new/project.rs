//! Project-level directory scaffolding for the new command.

use crate::error::{DjstartError, Result};
use std::fs;
use std::path::Path;

/// Extra folders created at the project root after the apps exist.
const EXTRA_DIRS: &[&str] = &["templates", "templates/static", "media", "scripts"];

/// Create the project root directory.
///
/// This is the single guarded failure path of the pipeline: if the
/// directory already exists the run stops with a user error (exit 1) and
/// nothing inside the existing directory is created, modified, or deleted.
pub(super) fn create_project_root(root: &Path) -> Result<()> {
    if root.exists() {
        return Err(DjstartError::UserError(format!(
            "there is already a folder called '{}'. Remove it or pick another project_dir.",
            root.display()
        )));
    }

    fs::create_dir_all(root).map_err(|e| {
        DjstartError::UserError(format!(
            "failed to create project folder '{}': {}",
            root.display(),
            e
        ))
    })
}

/// Create the extra top-level folders, idempotently.
pub(super) fn create_extra_dirs(root: &Path) -> Result<()> {
    for dir in EXTRA_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path).map_err(|e| {
            DjstartError::UserError(format!(
                "failed to create directory '{}': {}",
                path.display(),
                e
            ))
        })?;
    }

    Ok(())
}
