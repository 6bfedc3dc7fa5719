//! A fake execution backend for facade tests.
//!
//! Records every invocation it receives and replays scripted outcomes
//! instead of spawning real processes. Scripted stdout/stderr is also
//! written through to the sinks, mirroring the real backend's
//! write-through behaviour.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tokio::io::AsyncWriteExt;
use tokio::sync::oneshot;

use tfexec::errors::TfExecError;
use tfexec::exec::{ExecBackend, ExecOutput, Invocation, Sinks};
use tfexec::Result;

/// One scripted run outcome.
#[derive(Debug, Clone)]
pub enum FakeOutcome {
    Success { stdout: String, stderr: String },
    Exit { code: i32, stderr: String },
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    invocations: Arc<Mutex<Vec<Invocation>>>,
    script: Arc<Mutex<VecDeque<FakeOutcome>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        FakeBackend::default()
    }

    /// Queue a successful run that prints `stdout`.
    pub fn push_success(&self, stdout: &str) {
        self.script.lock().unwrap().push_back(FakeOutcome::Success {
            stdout: stdout.to_string(),
            stderr: String::new(),
        });
    }

    /// Queue a failing run with the given exit code and stderr.
    pub fn push_exit(&self, code: i32, stderr: &str) {
        self.script.lock().unwrap().push_back(FakeOutcome::Exit {
            code,
            stderr: stderr.to_string(),
        });
    }

    /// Every invocation received so far, in call order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// The argv of the only invocation received. Panics if there was
    /// not exactly one call.
    pub fn single_argv(&self) -> Vec<String> {
        let invocations = self.invocations();
        assert_eq!(invocations.len(), 1, "expected exactly one invocation");
        invocations[0].args.clone()
    }
}

impl ExecBackend for FakeBackend {
    fn run<'a>(
        &'a self,
        invocation: Invocation,
        mut sinks: Sinks,
        _cancel: Option<oneshot::Receiver<()>>,
    ) -> Pin<Box<dyn Future<Output = Result<ExecOutput>> + Send + 'a>> {
        self.invocations.lock().unwrap().push(invocation);
        let outcome = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(FakeOutcome::Success { stdout: String::new(), stderr: String::new() });

        Box::pin(async move {
            let (stdout, stderr) = match &outcome {
                FakeOutcome::Success { stdout, stderr } => (stdout.clone(), stderr.clone()),
                FakeOutcome::Exit { stderr, .. } => (String::new(), stderr.clone()),
            };

            if let Some(sink) = sinks.stdout.as_mut() {
                sink.write_all(stdout.as_bytes()).await?;
            }
            if let Some(sink) = sinks.stderr.as_mut() {
                sink.write_all(stderr.as_bytes()).await?;
            }

            match outcome {
                FakeOutcome::Success { .. } => Ok(ExecOutput { stdout, stderr }),
                FakeOutcome::Exit { code, stderr } => {
                    Err(TfExecError::Exit { code: Some(code), stderr })
                }
            }
        })
    }
}
