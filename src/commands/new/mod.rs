//! Implementation of the `djstart new` command.
//!
//! This is the full scaffold pipeline, run as a single linear pass:
//!
//! 1. Load and validate the configuration (CLI flags override it)
//! 2. Create the project root directory (fails if it already exists)
//! 3. Create the virtual environment
//! 4. Generate the project skeleton with django-admin
//! 5. Per app: generate the skeleton, create template dirs, write the
//!    view and urls stubs
//! 6. Create the extra folders (templates/, templates/static/, media/,
//!    scripts/)
//! 7. Patch the project urls.py and settings.py
//!
//! Nothing is transactional: a failure partway leaves a partially
//! initialized project directory behind. External tool failures abort the
//! pipeline unless --keep-going is set, in which case they are only warned
//! about (the original fire-and-forget behavior).

mod apps;
mod project;


use crate::cli::NewArgs;
use crate::config::Config;
use crate::error::Result;
use crate::patch;
use crate::tool::{self, ToolOutput};
use std::path::PathBuf;

use apps::*;
use project::*;

/// Execute the `djstart new` command.
pub fn cmd_new(args: NewArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    // CLI overrides, re-validated since they bypass the load-time check.
    if let Some(project_dir) = args.project_dir {
        config.project_dir = project_dir;
    }
    if let Some(apps) = args.apps {
        config.apps = apps;
    }
    config.validate()?;

    let app_names = config.apps_list();
    let root = PathBuf::from(&config.project_dir);

    create_project_root(&root)?;
    println!("Created project folder: {}", config.project_dir);

    println!("Creating virtual environment...");
    run_step(
        tool::run_interpreter(&root, &config.python_alias, &["-m", "venv", config.venv_name.as_str()]),
        "virtual environment creation",
        args.keep_going,
    )?;
    println!("Created virtual environment: {}", config.venv_name);

    run_step(
        tool::run_tool(&root, "django-admin", &["startproject", config.project_module.as_str(), "."]),
        "project skeleton generation",
        args.keep_going,
    )?;
    println!("Created Django project: {}", config.project_module);

    let total = app_names.len();
    for (index, app) in app_names.iter().enumerate() {
        run_step(
            create_app_skeleton(&root, &config.python_alias, app),
            &format!("app skeleton generation for '{}'", app),
            args.keep_going,
        )?;
        scaffold_app_files(&root, app)?;
        println!("Created Django app ({}/{}): {}", index + 1, total, app);
    }

    create_extra_dirs(&root)?;
    println!("Created extra folders");

    let module_dir = root.join(&config.project_module);
    patch::patch_file(module_dir.join("urls.py"), "project urls.py", |text| {
        patch::urls::patch_urls(text, &app_names)
    })?;
    println!("Updated {}/urls.py file", config.project_module);

    patch::patch_file(module_dir.join("settings.py"), "project settings.py", |text| {
        patch::settings::patch_settings(text, &app_names, &config.language, &config.timezone)
    })?;
    println!("Updated {}/settings.py file", config.project_module);

    println!();
    println!("Project '{}' is ready.", config.project_dir);

    Ok(())
}

/// Run one external tool step, aborting on failure unless --keep-going.
///
/// With keep-going, both spawn failures and nonzero exits degrade to a
/// warning and the pipeline proceeds; later steps may then fail on files
/// the tool never produced.
fn run_step(result: Result<ToolOutput>, what: &str, keep_going: bool) -> Result<()> {
    match result.and_then(|out| out.ensure_success(what)) {
        Ok(()) => Ok(()),
        Err(err) if keep_going => {
            eprintln!("Warning: {} (continuing due to --keep-going)", err);
            Ok(())
        }
        Err(err) => Err(err),
    }
}
