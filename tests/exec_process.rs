// tests/exec_process.rs
//
// Integration tests that spawn real processes through the runner.

#![cfg(unix)]

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use tfexec::errors::TfExecError;
use tfexec::exec::{Invocation, Sinks, run, run_with};
use tfexec_test_utils::sinks::CaptureSink;
use tfexec_test_utils::{init_tracing, with_timeout};

#[tokio::test]
async fn zero_exit_resolves_with_stdout() {
    init_tracing();

    let out = run(&Invocation::raw("/bin/echo", ["hello"])).await.expect("run");
    assert_eq!(out.stdout, "hello\n");
    assert_eq!(out.stderr, "");
}

#[tokio::test]
async fn nonzero_exit_rejects_with_captured_stderr() {
    init_tracing();

    let inv = Invocation::raw("/bin/sh", ["-c", "echo boom 1>&2; exit 3"]);
    let err = run(&inv).await.unwrap_err();
    match err {
        TfExecError::Exit { code, stderr } => {
            assert_eq!(code, Some(3));
            assert_eq!(stderr, "boom\n");
        }
        other => panic!("expected Exit, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_binary_is_a_spawn_error_not_an_exit() {
    init_tracing();

    let inv = Invocation::raw("/definitely/not/a/binary", ["x"]);
    let err = run(&inv).await.unwrap_err();
    assert!(matches!(err, TfExecError::Spawn { .. }), "got {err:?}");
}

#[tokio::test]
async fn working_directory_is_honored() {
    init_tracing();

    let dir = tempfile::tempdir().expect("tempdir");
    let canonical = dir.path().canonicalize().expect("canonicalize");

    let inv = Invocation::raw("/bin/sh", ["-c", "pwd"]).cwd(dir.path());
    let out = run(&inv).await.expect("run");
    assert_eq!(
        std::path::Path::new(out.stdout.trim()).canonicalize().expect("canonicalize"),
        canonical
    );
}

#[tokio::test]
async fn environment_override_replaces_parent_env() {
    init_tracing();

    let mut env = BTreeMap::new();
    env.insert("TFEXEC_TEST_MARKER".to_string(), "42".to_string());

    let inv = Invocation::raw(
        "/bin/sh",
        ["-c", "printf '%s:%s' \"$TFEXEC_TEST_MARKER\" \"$TFEXEC_TEST_ABSENT\""],
    )
    .env(env);
    let out = run(&inv).await.expect("run");
    assert_eq!(out.stdout, "42:");
}

#[tokio::test]
async fn sinks_see_exactly_the_buffered_bytes() {
    init_tracing();

    let out_sink = CaptureSink::new();
    let err_sink = CaptureSink::new();
    let sinks = Sinks::stdout(out_sink.clone()).with_stderr(err_sink.clone());

    let inv = Invocation::raw("/bin/sh", ["-c", "printf out; printf err 1>&2"]);
    let result = run_with(&inv, sinks, None).await.expect("run");

    assert_eq!(result.stdout, "out");
    assert_eq!(result.stderr, "err");
    assert_eq!(out_sink.contents_string(), result.stdout);
    assert_eq!(err_sink.contents_string(), result.stderr);
}

#[tokio::test]
async fn cancellation_kills_the_child_promptly() {
    init_tracing();

    let (cancel_tx, cancel_rx) = tokio::sync::oneshot::channel::<()>();
    tokio::spawn(async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let _ = cancel_tx.send(());
    });

    let started = Instant::now();
    let inv = Invocation::raw("/bin/sh", ["-c", "sleep 30"]);
    let err = with_timeout(run_with(&inv, Sinks::none(), Some(cancel_rx)))
        .await
        .unwrap_err();

    assert!(matches!(err, TfExecError::Cancelled), "got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn dropped_cancel_handle_is_not_a_cancellation() {
    init_tracing();

    let (cancel_tx, cancel_rx) = tokio::sync::oneshot::channel::<()>();
    drop(cancel_tx);

    let inv = Invocation::raw("/bin/echo", ["still here"]);
    let out = run_with(&inv, Sinks::none(), Some(cancel_rx)).await.expect("run");
    assert_eq!(out.stdout, "still here\n");
}

#[tokio::test]
async fn result_includes_output_arriving_after_process_exit() {
    init_tracing();

    // The background subshell inherits the stdout pipe and keeps it
    // open past the main process's exit; the run must not resolve
    // until both streams have reached EOF.
    let inv = Invocation::raw(
        "/bin/sh",
        ["-c", "( sleep 0.2; printf late ) & printf 'now\n'"],
    );
    let out = with_timeout(run(&inv)).await.expect("run");
    assert_eq!(out.stdout, "now\nlate");
}

#[tokio::test]
async fn concurrent_invocations_do_not_interfere() {
    init_tracing();

    let inv_a = Invocation::raw("/bin/echo", ["first"]);
    let inv_b = Invocation::raw("/bin/echo", ["second"]);
    let a = run(&inv_a);
    let b = run(&inv_b);
    let (a, b) = tokio::join!(a, b);

    assert_eq!(a.expect("a").stdout, "first\n");
    assert_eq!(b.expect("b").stdout, "second\n");
}
