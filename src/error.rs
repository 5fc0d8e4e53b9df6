//! Error types for the djstart CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for djstart operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum DjstartError {
    /// User provided invalid arguments or the target state is invalid
    /// (e.g., the project root directory already exists).
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An external tool (interpreter, django-admin) failed.
    #[error("Tool failed: {0}")]
    ToolError(String),

    /// A patch step's anchor was not found in the target file.
    #[error("Patch failed: {0}")]
    PatchError(String),
}

impl DjstartError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DjstartError::UserError(_) => exit_codes::USER_ERROR,
            DjstartError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            DjstartError::ToolError(_) => exit_codes::TOOL_FAILURE,
            DjstartError::PatchError(_) => exit_codes::PATCH_FAILURE,
        }
    }
}

/// Result type alias for djstart operations.
pub type Result<T> = std::result::Result<T, DjstartError>;
