//! Configuration for djstart.
//!
//! The config file (`djstart.yaml` by default) holds the small fixed set of
//! settings that drive a scaffold run: interpreter alias, venv name, project
//! directory and module names, the comma-delimited app list, and optional
//! locale/timezone overrides.
//!
//! Split into:
//! - `model`: the Config struct and defaults
//! - `operations`: loading, serialization, validation, app-list parsing

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::Config;
