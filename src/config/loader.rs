// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Config, RawConfig};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw
/// `RawConfig`.
///
/// This only performs TOML deserialization; it does **not** perform
/// semantic validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
///
/// This is the recommended entry point:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for an empty executable path, empty `cwd`, and empty
///   environment variable names.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Config> {
    let raw = load_from_path(&path)?;
    let config = Config::try_from(raw)?;
    Ok(config)
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `Tfexec.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `TFEXEC_CONFIG`).
/// - Support project-local config discovery.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Tfexec.toml")
}
