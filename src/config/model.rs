//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Configuration for a djstart scaffold run.
///
/// This struct represents the contents of `djstart.yaml`. Unknown fields in
/// the YAML are ignored for forward compatibility. Created once at startup
/// and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal alias for the Python interpreter (e.g., "python3" or "py -3").
    /// May be multi-word; it is split with shell rules before spawning.
    #[serde(default = "default_python_alias")]
    pub python_alias: String,

    /// Name of the virtual environment directory inside the project root.
    #[serde(default = "default_venv_name")]
    pub venv_name: String,

    /// Name of the project root directory to create.
    #[serde(default = "default_project_dir")]
    pub project_dir: String,

    /// Name of the main Django project module (holds urls.py and settings.py).
    #[serde(default = "default_project_module")]
    pub project_module: String,

    /// Comma-delimited app names, in mount order. A single bare name
    /// (no comma) is also accepted.
    #[serde(default = "default_apps")]
    pub apps: String,

    /// Locale override (e.g., "pt-br"). Empty keeps the generator default.
    #[serde(default)]
    pub language: String,

    /// Timezone override (e.g., "America/Sao_Paulo"). Empty keeps the
    /// generator default.
    #[serde(default)]
    pub timezone: String,
}

fn default_python_alias() -> String {
    "python3".to_string()
}

fn default_venv_name() -> String {
    ".venv".to_string()
}

fn default_project_dir() -> String {
    "django_project".to_string()
}

fn default_project_module() -> String {
    "project_main".to_string()
}

fn default_apps() -> String {
    "home".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            python_alias: default_python_alias(),
            venv_name: default_venv_name(),
            project_dir: default_project_dir(),
            project_module: default_project_module(),
            apps: default_apps(),
            language: String::new(),
            timezone: String::new(),
        }
    }
}
