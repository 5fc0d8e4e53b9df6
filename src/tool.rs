//! External tool runner for djstart.
//!
//! Provides a wrapper around the generator commands (the Python interpreter,
//! django-admin) with captured stdout/stderr and an explicit exit status.
//! All external invocations go through this module so the caller can decide
//! whether a nonzero exit aborts the pipeline or is only warned about.

use crate::error::{DjstartError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a tool invocation that could be spawned.
///
/// A nonzero exit is not an error by itself; call [`ToolOutput::ensure_success`]
/// to turn it into one.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code of the process (None if terminated by a signal).
    pub exit_code: Option<i32>,
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl ToolOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if the process exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Convert a nonzero exit into a `ToolError` describing what failed.
    ///
    /// # Arguments
    ///
    /// * `what` - Human-readable description of the invocation
    ///   (e.g., "virtual environment creation")
    pub fn ensure_success(&self, what: &str) -> Result<()> {
        if self.success() {
            return Ok(());
        }

        let detail = if self.stderr.is_empty() {
            self.stdout.clone()
        } else {
            self.stderr.clone()
        };

        Err(DjstartError::ToolError(format!(
            "{} exited with code {}: {}",
            what,
            self.exit_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            detail
        )))
    }
}

/// Run an external command in the given working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `program` - The executable name
/// * `args` - The command arguments
///
/// # Returns
///
/// * `Ok(ToolOutput)` - The process ran to completion (any exit code)
/// * `Err(DjstartError::ToolError)` - The process could not be spawned
///   (e.g., the executable is not on PATH)
pub fn run_tool<P, S>(cwd: P, program: &str, args: &[S]) -> Result<ToolOutput>
where
    P: AsRef<Path>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = Command::new(program)
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            DjstartError::ToolError(format!(
                "failed to execute '{}': {} (is it installed and on PATH?)",
                program, e
            ))
        })?;

    Ok(ToolOutput::from_output(&output))
}

/// Split the configured interpreter alias into program and leading arguments.
///
/// The alias may be multi-word (e.g., "py -3"), so it is split with shell
/// rules rather than used verbatim as an executable name.
pub fn split_alias(alias: &str) -> Result<(String, Vec<String>)> {
    let words = shell_words::split(alias).map_err(|e| {
        DjstartError::ToolError(format!(
            "failed to parse python_alias '{}': {}\n\
             Fix: check for unmatched quotes in the config.",
            alias, e
        ))
    })?;

    let mut iter = words.into_iter();
    match iter.next() {
        Some(program) => Ok((program, iter.collect())),
        None => Err(DjstartError::ToolError(
            "python_alias is empty after parsing".to_string(),
        )),
    }
}

/// Run the configured interpreter with extra arguments appended after the
/// alias's own arguments.
pub fn run_interpreter<P: AsRef<Path>>(cwd: P, alias: &str, args: &[&str]) -> Result<ToolOutput> {
    let (program, mut full_args) = split_alias(alias)?;
    full_args.extend(args.iter().map(|s| s.to_string()));
    run_tool(cwd, &program, &full_args)
}
