//! CLI argument parsing for djstart.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Djstart: scaffold a Django project with apps, a venv, and wired-up
/// urls/settings.
///
/// A run creates the project root directory, a virtual environment, the
/// main project module, and one module per configured app, then patches the
/// generated `urls.py` and `settings.py` so the apps are actually mounted.
#[derive(Parser, Debug)]
#[command(name = "djstart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for djstart.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a new Django project from the configuration file.
    ///
    /// Fails fast if the project root directory already exists; everything
    /// else runs as a single linear pipeline with no rollback.
    New(NewArgs),

    /// Write a starter djstart.yaml with default values.
    ///
    /// Refuses to overwrite an existing file.
    Init(InitArgs),

    /// Check that the configured interpreter and django-admin are runnable.
    Doctor(DoctorArgs),
}

/// Arguments for the `new` command.
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "djstart.yaml")]
    pub config: PathBuf,

    /// Override the project root directory name from the config.
    #[arg(long)]
    pub project_dir: Option<String>,

    /// Override the comma-delimited app list from the config.
    #[arg(long)]
    pub apps: Option<String>,

    /// Continue when an external tool exits nonzero instead of aborting.
    ///
    /// This restores the original fire-and-forget behavior; later steps may
    /// then fail on files the tool never produced.
    #[arg(long)]
    pub keep_going: bool,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the starter configuration file.
    #[arg(default_value = "djstart.yaml")]
    pub path: PathBuf,
}

/// Arguments for the `doctor` command.
#[derive(Parser, Debug)]
pub struct DoctorArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "djstart.yaml")]
    pub config: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_defaults() {
        let cli = Cli::try_parse_from(["djstart", "new"]).unwrap();
        if let Command::New(args) = cli.command {
            assert_eq!(args.config, PathBuf::from("djstart.yaml"));
            assert!(args.project_dir.is_none());
            assert!(args.apps.is_none());
            assert!(!args.keep_going);
        } else {
            panic!("Expected New command");
        }
    }

    #[test]
    fn parse_new_full() {
        let cli = Cli::try_parse_from([
            "djstart",
            "new",
            "--config",
            "custom.yaml",
            "--project-dir",
            "films_project",
            "--apps",
            "films,budget",
            "--keep-going",
        ])
        .unwrap();
        if let Command::New(args) = cli.command {
            assert_eq!(args.config, PathBuf::from("custom.yaml"));
            assert_eq!(args.project_dir.as_deref(), Some("films_project"));
            assert_eq!(args.apps.as_deref(), Some("films,budget"));
            assert!(args.keep_going);
        } else {
            panic!("Expected New command");
        }
    }

    #[test]
    fn parse_init_default_path() {
        let cli = Cli::try_parse_from(["djstart", "init"]).unwrap();
        if let Command::Init(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("djstart.yaml"));
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn parse_init_custom_path() {
        let cli = Cli::try_parse_from(["djstart", "init", "conf/site.yaml"]).unwrap();
        if let Command::Init(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("conf/site.yaml"));
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn parse_doctor() {
        let cli = Cli::try_parse_from(["djstart", "doctor"]).unwrap();
        if let Command::Doctor(args) = cli.command {
            assert_eq!(args.config, PathBuf::from("djstart.yaml"));
        } else {
            panic!("Expected Doctor command");
        }
    }
}
