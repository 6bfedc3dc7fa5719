// src/exec/mod.rs

//! Process execution layer.
//!
//! This module turns a resolved [`Invocation`] into exactly one
//! spawned terraform process, using `tokio::process::Command`, and
//! reduces the run to a single success/failure outcome:
//!
//! - [`invocation`] resolves a `Config` + `Command` pair into a spawn
//!   descriptor and defines the success payload and sink types.
//! - [`runner`] owns the spawn/capture/wait loop.
//! - [`backend`] provides the [`ExecBackend`] trait and the concrete
//!   [`ProcessBackend`] used in production; tests can substitute a
//!   fake implementation that never spawns real processes.

pub mod backend;
pub mod invocation;
pub mod runner;

pub use backend::{ExecBackend, ProcessBackend};
pub use invocation::{ExecOutput, Invocation, Sink, Sinks};
pub use runner::{run, run_with};
