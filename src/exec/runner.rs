// src/exec/runner.rs

//! Single-shot process runner.
//!
//! Exactly one child process per call. Stdout and stderr are pumped by
//! two concurrent tasks; each chunk is forwarded to the optional sink
//! first, then appended to that stream's buffer, in arrival order.
//! Both pump tasks are joined after the child exits, so the full final
//! content of both streams is visible before the call returns.
//!
//! Failure taxonomy:
//! - spawn failure → [`TfExecError::Spawn`]
//! - nonzero exit → [`TfExecError::Exit`] with code + captured stderr
//! - cancellation → [`TfExecError::Cancelled`] (the child is killed
//!   and reaped before returning)

use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::Command as TokioCommand;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::errors::{Result, TfExecError};
use crate::exec::invocation::{ExecOutput, Invocation, Sink, Sinks};

/// Run an invocation with no sinks and no cancellation.
pub async fn run(invocation: &Invocation) -> Result<ExecOutput> {
    run_with(invocation, Sinks::none(), None).await
}

/// Run an invocation, forwarding output chunks to `sinks` and honoring
/// an optional cancel signal.
///
/// A dropped (never fired) cancel handle is not a cancellation; the
/// run proceeds to normal completion.
pub async fn run_with(
    invocation: &Invocation,
    sinks: Sinks,
    cancel: Option<oneshot::Receiver<()>>,
) -> Result<ExecOutput> {
    debug!(
        program = %invocation.program,
        args = ?invocation.args,
        cwd = ?invocation.cwd,
        "spawning process"
    );

    let mut command = TokioCommand::new(&invocation.program);
    command
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(cwd) = &invocation.cwd {
        command.current_dir(cwd);
    }
    if let Some(env) = &invocation.env {
        command.env_clear();
        command.envs(env);
    }

    let mut child = command.spawn().map_err(|source| TfExecError::Spawn {
        program: invocation.program.clone(),
        source,
    })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let out_handle = tokio::spawn(pump(stdout, sinks.stdout));
    let err_handle = tokio::spawn(pump(stderr, sinks.stderr));

    let status = match cancel {
        Some(mut cancel_rx) => {
            tokio::select! {
                res = child.wait() => res,
                cancelled = &mut cancel_rx => match cancelled {
                    Ok(()) => {
                        debug!(program = %invocation.program, "cancellation requested; killing process");
                        if let Err(e) = child.kill().await {
                            warn!(program = %invocation.program, error = %e, "failed to kill child on cancellation");
                        }
                        // Pipes are closed by the kill; the pumps run to EOF.
                        let _ = out_handle.await;
                        let _ = err_handle.await;
                        return Err(TfExecError::Cancelled);
                    }
                    // Cancel handle dropped without firing; keep waiting.
                    Err(_) => child.wait().await,
                },
            }
        }
        None => child.wait().await,
    };
    let status = status?;

    let stdout_text = join_pump(out_handle).await?;
    let stderr_text = join_pump(err_handle).await?;

    debug!(
        program = %invocation.program,
        exit_code = ?status.code(),
        success = status.success(),
        "process exited"
    );

    if status.success() {
        Ok(ExecOutput { stdout: stdout_text, stderr: stderr_text })
    } else {
        Err(TfExecError::Exit { code: status.code(), stderr: stderr_text })
    }
}

/// Consume one stream to EOF, write-through-copying every chunk to the
/// sink before buffering it.
async fn pump<R>(reader: Option<R>, mut sink: Option<Sink>) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let Some(mut reader) = reader else {
        return Ok(String::new());
    };

    let mut buf = [0u8; 8192];
    let mut acc: Vec<u8> = Vec::new();

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        if let Some(sink) = sink.as_mut() {
            sink.write_all(&buf[..n]).await?;
        }
        acc.extend_from_slice(&buf[..n]);
    }

    if let Some(sink) = sink.as_mut() {
        sink.flush().await?;
    }

    Ok(String::from_utf8_lossy(&acc).into_owned())
}

async fn join_pump(handle: JoinHandle<std::io::Result<String>>) -> Result<String> {
    match handle.await {
        Ok(res) => Ok(res?),
        Err(e) => Err(anyhow::anyhow!("output capture task failed: {e}").into()),
    }
}
