//! Config loading, validation, and app-list parsing.

use super::model::Config;
use crate::error::{DjstartError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Valid Python identifier: the app and module names are spliced directly
/// into generated source, so anything else is rejected up front.
static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"));

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DjstartError::ConfigError)` - Read, parse, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DjstartError::ConfigError(format!(
                "failed to read config file '{}': {}\n\
                 Run `djstart init` to create a starter config.",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| DjstartError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DjstartError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Parse the comma-delimited `apps` field into the ordered app-name list.
    ///
    /// Whitespace around each name is trimmed and empty segments are dropped,
    /// so `"films, budget,"` yields `["films", "budget"]`. A single bare name
    /// (no comma) yields a one-element list.
    pub fn apps_list(&self) -> Vec<String> {
        self.apps
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validate config values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - `python_alias` must be non-empty and splittable with shell rules
    /// - `venv_name` and `project_dir` must be non-empty plain names
    ///   (no path separators)
    /// - `project_module` and every app name must be valid Python identifiers
    /// - the app list must be non-empty and free of duplicates
    pub fn validate(&self) -> Result<()> {
        let alias_words = shell_words::split(&self.python_alias).map_err(|e| {
            DjstartError::ConfigError(format!(
                "config validation failed: python_alias '{}' is not parseable: {}",
                self.python_alias, e
            ))
        })?;
        if alias_words.is_empty() {
            return Err(DjstartError::ConfigError(
                "config validation failed: python_alias must not be empty".to_string(),
            ));
        }

        validate_plain_name("venv_name", &self.venv_name)?;
        validate_plain_name("project_dir", &self.project_dir)?;

        if !IDENTIFIER_RE.is_match(&self.project_module) {
            return Err(DjstartError::ConfigError(format!(
                "config validation failed: project_module '{}' is not a valid Python identifier",
                self.project_module
            )));
        }

        let apps = self.apps_list();
        if apps.is_empty() {
            return Err(DjstartError::ConfigError(
                "config validation failed: apps must contain at least one app name".to_string(),
            ));
        }

        for (i, app) in apps.iter().enumerate() {
            if !IDENTIFIER_RE.is_match(app) {
                return Err(DjstartError::ConfigError(format!(
                    "config validation failed: app name '{}' is not a valid Python identifier",
                    app
                )));
            }
            if apps[..i].contains(app) {
                return Err(DjstartError::ConfigError(format!(
                    "config validation failed: app name '{}' is listed more than once",
                    app
                )));
            }
        }

        Ok(())
    }
}

/// A directory name that will be created under the project root (or be the
/// root itself) must be a single non-empty path component.
fn validate_plain_name(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DjstartError::ConfigError(format!(
            "config validation failed: {} must not be empty",
            field
        )));
    }
    if value.contains('/') || value.contains('\\') || value == "." || value == ".." {
        return Err(DjstartError::ConfigError(format!(
            "config validation failed: {} '{}' must be a plain directory name",
            field, value
        )));
    }
    Ok(())
}
