//! Implementation of the `djstart init` command.
//!
//! Writes a starter `djstart.yaml` with default values for the user to edit
//! before running `djstart new`.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{DjstartError, Result};
use crate::fs::atomic_write_file;

/// Execute the `djstart init` command.
///
/// Refuses to overwrite an existing file so a configured project is never
/// clobbered by accident.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    if args.path.exists() {
        return Err(DjstartError::UserError(format!(
            "'{}' already exists, refusing to overwrite it.\n\
             Remove the file first if you want a fresh starter config.",
            args.path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    atomic_write_file(&args.path, &yaml)?;

    println!("Wrote starter config: {}", args.path.display());
    println!();
    println!("Edit it (apps are comma-delimited, no quotes) and then run `djstart new`.");

    Ok(())
}
