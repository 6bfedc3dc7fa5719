// src/errors.rs

//! Crate-wide error type and helpers.
//!
//! The variants keep the failure families of a CLI-driving library
//! distinct:
//!
//! - [`TfExecError::Spawn`]: the terraform binary could not be started
//!   at all (missing executable, permission denied).
//! - [`TfExecError::Exit`]: the process ran and reported failure via a
//!   nonzero exit status; carries the captured stderr.
//! - [`TfExecError::Parse`]: the process succeeded but its output did
//!   not have the shape an output parser expected.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TfExecError {
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("process exited with status {code:?}: {stderr}")]
    Exit { code: Option<i32>, stderr: String },

    #[error("execution cancelled")]
    Cancelled,

    #[error("output parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TfExecError {
    /// Captured stderr of a failed run, if this error carries one.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            TfExecError::Exit { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TfExecError>;
