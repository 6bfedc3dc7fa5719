// src/config/mod.rs

//! Executor configuration.
//!
//! A [`Config`] is plain data constructed once per logical terraform
//! target (binary + working directory) and never mutated afterwards.
//! It can be built in code or loaded from a TOML file via [`loader`].

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::{Result, TfExecError};

pub mod loader;

/// Configuration as it appears in a TOML file, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    pub path: String,
    pub cwd: Option<PathBuf>,
    pub env: Option<BTreeMap<String, String>>,
    pub no_color: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        RawConfig {
            path: "terraform".to_string(),
            cwd: None,
            env: None,
            no_color: true,
        }
    }
}

/// Validated executor configuration.
///
/// - `path`: the terraform executable; resolved via the search path
///   when not absolute. Defaults to `"terraform"`.
/// - `cwd`: working directory for spawned processes; `None` means the
///   caller's current working directory.
/// - `env`: full environment override for spawned processes; `None`
///   means inherit the parent environment.
/// - `no_color`: when `true` (the default), every command gets the
///   global `-no-color` token. This is the one global flag the
///   builder knows about, and it is a config default on purpose
///   rather than an implicit part of command serialization.
#[derive(Debug, Clone)]
pub struct Config {
    pub path: String,
    pub cwd: Option<PathBuf>,
    pub env: Option<BTreeMap<String, String>>,
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config::new_unchecked(RawConfig::default())
    }
}

impl Config {
    fn new_unchecked(raw: RawConfig) -> Self {
        Config {
            path: raw.path,
            cwd: raw.cwd,
            env: raw.env,
            no_color: raw.no_color,
        }
    }

    /// Config for a terraform binary at `path`.
    pub fn with_path(path: impl Into<String>) -> Self {
        Config { path: path.into(), ..Config::default() }
    }

    /// Set the working directory for spawned processes.
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Replace the spawned processes' environment.
    pub fn env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    /// Set the `-no-color` policy.
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = TfExecError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        validate_raw_config(&raw)?;
        Ok(Config::new_unchecked(raw))
    }
}

fn validate_raw_config(raw: &RawConfig) -> Result<()> {
    if raw.path.trim().is_empty() {
        return Err(TfExecError::Config(
            "`path` must not be empty (default is \"terraform\")".to_string(),
        ));
    }

    if let Some(cwd) = &raw.cwd
        && cwd.as_os_str().is_empty()
    {
        return Err(TfExecError::Config("`cwd` must not be empty when set".to_string()));
    }

    if let Some(env) = &raw.env {
        for key in env.keys() {
            if key.trim().is_empty() {
                return Err(TfExecError::Config(
                    "`env` must not contain empty variable names".to_string(),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_terraform_with_no_color() {
        let cfg = Config::default();
        assert_eq!(cfg.path, "terraform");
        assert!(cfg.cwd.is_none());
        assert!(cfg.env.is_none());
        assert!(cfg.no_color);
    }

    #[test]
    fn empty_path_is_rejected() {
        let raw = RawConfig { path: "  ".to_string(), ..RawConfig::default() };
        assert!(matches!(Config::try_from(raw), Err(TfExecError::Config(_))));
    }

    #[test]
    fn empty_env_key_is_rejected() {
        let mut env = BTreeMap::new();
        env.insert(String::new(), "x".to_string());
        let raw = RawConfig { env: Some(env), ..RawConfig::default() };
        assert!(matches!(Config::try_from(raw), Err(TfExecError::Config(_))));
    }

    #[test]
    fn builder_methods_fill_fields() {
        let cfg = Config::with_path("/usr/local/bin/terraform")
            .cwd("/srv/infra")
            .no_color(false);
        assert_eq!(cfg.path, "/usr/local/bin/terraform");
        assert_eq!(cfg.cwd.as_deref(), Some(std::path::Path::new("/srv/infra")));
        assert!(!cfg.no_color);
    }
}
