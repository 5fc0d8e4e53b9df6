//! Per-app scaffolding: skeleton generation, template directories, and the
//! view/urls stubs.

use crate::error::{DjstartError, Result};
use crate::fs::atomic_write_file;
use crate::stubs;
use crate::tool::{self, ToolOutput};
use std::fs;
use std::path::Path;

/// Run `manage.py startapp` for one app in the project root.
///
/// The returned output carries the exit status; the caller decides whether
/// a failure aborts the pipeline.
pub(super) fn create_app_skeleton(root: &Path, alias: &str, app: &str) -> Result<ToolOutput> {
    tool::run_interpreter(root, alias, &["manage.py", "startapp", app])
}

/// Create the app's template directories and write its view/urls stubs.
///
/// The stub writes are unconditional overwrites: `views.py` is replaced
/// wholesale and `urls.py` is created fresh, with no merge of pre-existing
/// content.
pub(super) fn scaffold_app_files(root: &Path, app: &str) -> Result<()> {
    create_template_dirs(root, app)?;

    let app_dir = root.join(app);
    atomic_write_file(app_dir.join("views.py"), &stubs::views_module(app))?;
    atomic_write_file(app_dir.join("urls.py"), &stubs::app_urls_module(app))?;

    Ok(())
}

/// Create `{app}/templates/` and `{app}/templates/{app}/`, idempotently.
fn create_template_dirs(root: &Path, app: &str) -> Result<()> {
    let nested = root.join(app).join("templates").join(app);
    fs::create_dir_all(&nested).map_err(|e| {
        DjstartError::UserError(format!(
            "failed to create template directories '{}': {}",
            nested.display(),
            e
        ))
    })
}
