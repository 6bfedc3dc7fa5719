// src/exec/backend.rs

//! Pluggable execution backend abstraction.
//!
//! The [`Terraform`](crate::terraform::Terraform) facade talks to an
//! `ExecBackend` instead of calling [`runner`](crate::exec::runner)
//! directly. This makes it easy to swap in a fake backend in tests
//! (recording invocations, returning scripted outcomes) while keeping
//! the production implementation in [`ProcessBackend`].

use std::future::Future;
use std::pin::Pin;

use tokio::sync::oneshot;

use crate::errors::Result;
use crate::exec::invocation::{ExecOutput, Invocation, Sinks};
use crate::exec::runner;

/// Trait abstracting how invocations are executed.
///
/// Production code uses [`ProcessBackend`]; tests can provide their
/// own implementation that doesn't spawn real processes.
pub trait ExecBackend: Send + Sync {
    /// Execute the invocation, forwarding output to `sinks` and
    /// honoring the optional cancel signal.
    fn run<'a>(
        &'a self,
        invocation: Invocation,
        sinks: Sinks,
        cancel: Option<oneshot::Receiver<()>>,
    ) -> Pin<Box<dyn Future<Output = Result<ExecOutput>> + Send + 'a>>;
}

/// The real backend: spawns one OS process per invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessBackend;

impl ExecBackend for ProcessBackend {
    fn run<'a>(
        &'a self,
        invocation: Invocation,
        sinks: Sinks,
        cancel: Option<oneshot::Receiver<()>>,
    ) -> Pin<Box<dyn Future<Output = Result<ExecOutput>> + Send + 'a>> {
        Box::pin(async move { runner::run_with(&invocation, sinks, cancel).await })
    }
}
