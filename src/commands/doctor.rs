//! Implementation of the `djstart doctor` command.
//!
//! Probes the external tools a scaffold run depends on: the configured
//! Python interpreter alias and `django-admin`. Reports each check and
//! fails if any tool is not runnable.

use crate::cli::DoctorArgs;
use crate::config::Config;
use crate::error::{DjstartError, Result};
use crate::tool::{self, ToolOutput};

/// Execute the `djstart doctor` command.
pub fn cmd_doctor(args: DoctorArgs) -> Result<()> {
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(_) => {
            println!(
                "No readable config at '{}', checking with defaults.",
                args.config.display()
            );
            Config::default()
        }
    };

    println!("Checking external tools:");

    let interpreter_label = format!("interpreter ({})", config.python_alias);
    let interpreter_ok = report(
        &interpreter_label,
        tool::run_interpreter(".", &config.python_alias, &["--version"]),
    );
    let django_admin_ok = report(
        "django-admin",
        tool::run_tool(".", "django-admin", &["--version"]),
    );

    let failures = [interpreter_ok, django_admin_ok]
        .iter()
        .filter(|ok| !**ok)
        .count();

    if failures == 0 {
        println!();
        println!("All checks passed.");
        Ok(())
    } else {
        Err(DjstartError::ToolError(format!(
            "{} check(s) failed. Install the missing tools or fix python_alias in the config.",
            failures
        )))
    }
}

/// Print one check line and return whether the probe succeeded.
///
/// Some tools print their version to stderr, so fall back to it when
/// stdout is empty.
fn report(label: &str, result: Result<ToolOutput>) -> bool {
    match result {
        Ok(out) if out.success() => {
            let version = if out.stdout.is_empty() {
                &out.stderr
            } else {
                &out.stdout
            };
            println!("  OK   {}: {}", label, version);
            true
        }
        Ok(out) => {
            println!(
                "  FAIL {}: exited with code {}",
                label,
                out.exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "unknown".to_string())
            );
            false
        }
        Err(err) => {
            println!("  FAIL {}: {}", label, err);
            false
        }
    }
}
