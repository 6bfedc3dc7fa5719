// src/terraform.rs

//! The `Terraform` facade: an executor bound to one configuration.
//!
//! Constructed once from a [`Config`], then reused for any number of
//! invocations (concurrent calls are fine; the facade holds no
//! per-call state). One typed method per supported subcommand; the
//! commands whose output has a stable text shape return parsed values
//! instead of raw stdout.

use tokio::sync::oneshot;

use crate::cmd::{self, Command};
use crate::config::Config;
use crate::errors::Result;
use crate::exec::{ExecBackend, ExecOutput, Invocation, ProcessBackend, Sinks};
use crate::parse;

pub struct Terraform<B: ExecBackend = ProcessBackend> {
    config: Config,
    backend: B,
}

impl Terraform {
    /// A facade over the real process backend.
    pub fn new(config: Config) -> Self {
        Terraform { config, backend: ProcessBackend }
    }

    /// Load the config from a TOML file and build a facade from it.
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Terraform::new(crate::config::loader::load_and_validate(path)?))
    }
}

impl<B: ExecBackend> Terraform<B> {
    /// A facade over a caller-supplied backend (used by tests to
    /// substitute a fake executor).
    pub fn with_backend(config: Config, backend: B) -> Self {
        Terraform { config, backend }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute a command and return its captured stdout.
    pub async fn exec(&self, command: &Command) -> Result<String> {
        Ok(self.exec_streaming(command, Sinks::none()).await?.into_stdout())
    }

    /// Execute a command, forwarding output chunks to `sinks` while
    /// still buffering for the final result.
    pub async fn exec_streaming(&self, command: &Command, sinks: Sinks) -> Result<ExecOutput> {
        let invocation = Invocation::resolve(&self.config, command);
        self.backend.run(invocation, sinks, None).await
    }

    /// Execute a command that can be cancelled. On cancellation the
    /// child is killed and the call returns
    /// [`TfExecError::Cancelled`](crate::errors::TfExecError::Cancelled).
    pub async fn exec_cancellable(
        &self,
        command: &Command,
        sinks: Sinks,
        cancel: oneshot::Receiver<()>,
    ) -> Result<ExecOutput> {
        let invocation = Invocation::resolve(&self.config, command);
        self.backend.run(invocation, sinks, Some(cancel)).await
    }

    /// Execute a command and post-process its stdout with `parser`.
    pub async fn exec_parsed<T>(
        &self,
        command: &Command,
        parser: impl FnOnce(&str) -> Result<T>,
    ) -> Result<T> {
        let stdout = self.exec(command).await?;
        parser(&stdout)
    }

    pub async fn apply(&self, dir_or_plan: Option<&str>, opts: cmd::ApplyOpts) -> Result<String> {
        self.exec(&cmd::apply(dir_or_plan, opts)).await
    }

    pub async fn destroy(&self, dir: Option<&str>, opts: cmd::DestroyOpts) -> Result<String> {
        self.exec(&cmd::destroy(dir, opts)).await
    }

    pub async fn fmt(&self, dir: Option<&str>, opts: cmd::FmtOpts) -> Result<String> {
        self.exec(&cmd::fmt(dir, opts)).await
    }

    pub async fn force_unlock(
        &self,
        lock_id: &str,
        dir: Option<&str>,
        opts: cmd::ForceUnlockOpts,
    ) -> Result<String> {
        self.exec(&cmd::force_unlock(lock_id, dir, opts)).await
    }

    pub async fn get(&self, dir: Option<&str>, opts: cmd::GetOpts) -> Result<String> {
        self.exec(&cmd::get(dir, opts)).await
    }

    pub async fn graph(&self, dir: Option<&str>, opts: cmd::GraphOpts) -> Result<String> {
        self.exec(&cmd::graph(dir, opts)).await
    }

    pub async fn import(&self, address: &str, id: &str, opts: cmd::ImportOpts) -> Result<String> {
        self.exec(&cmd::import(address, id, opts)).await
    }

    pub async fn init(&self, dir: Option<&str>, opts: cmd::InitOpts) -> Result<String> {
        self.exec(&cmd::init(dir, opts)).await
    }

    pub async fn output(&self, name: Option<&str>, opts: cmd::OutputOpts) -> Result<String> {
        self.exec(&cmd::output(name, opts)).await
    }

    /// `output -json`, parsed.
    pub async fn output_json(&self, name: Option<&str>) -> Result<serde_json::Value> {
        let opts = cmd::OutputOpts { json: true, ..Default::default() };
        self.exec_parsed(&cmd::output(name, opts), |raw| Ok(serde_json::from_str(raw)?))
            .await
    }

    pub async fn plan(&self, dir_or_plan: Option<&str>, opts: cmd::PlanOpts) -> Result<String> {
        self.exec(&cmd::plan(dir_or_plan, opts)).await
    }

    pub async fn providers(&self, config_path: Option<&str>) -> Result<String> {
        self.exec(&cmd::providers(config_path)).await
    }

    pub async fn push(&self, path: Option<&str>, opts: cmd::PushOpts) -> Result<String> {
        self.exec(&cmd::push(path, opts)).await
    }

    pub async fn refresh(&self, dir: Option<&str>, opts: cmd::RefreshOpts) -> Result<String> {
        self.exec(&cmd::refresh(dir, opts)).await
    }

    pub async fn show(&self, path: Option<&str>, opts: cmd::ShowOpts) -> Result<String> {
        self.exec(&cmd::show(path, opts)).await
    }

    pub async fn state_list(
        &self,
        addresses: &[&str],
        opts: cmd::StateListOpts,
    ) -> Result<Vec<String>> {
        self.exec_parsed(&cmd::state_list(addresses, opts), |raw| Ok(parse::state_list(raw)))
            .await
    }

    pub async fn state_mv(&self, src: &str, dest: &str, opts: cmd::StateMvOpts) -> Result<String> {
        self.exec(&cmd::state_mv(src, dest, opts)).await
    }

    pub async fn state_pull(&self) -> Result<serde_json::Value> {
        self.exec_parsed(&cmd::state_pull(), parse::state_pull).await
    }

    pub async fn state_push(&self, path: &str, opts: cmd::StatePushOpts) -> Result<String> {
        self.exec(&cmd::state_push(path, opts)).await
    }

    pub async fn state_rm(&self, addresses: &[&str], opts: cmd::StateRmOpts) -> Result<String> {
        self.exec(&cmd::state_rm(addresses, opts)).await
    }

    pub async fn state_show(
        &self,
        address: &str,
        opts: cmd::StateShowOpts,
    ) -> Result<Vec<(String, String)>> {
        self.exec_parsed(&cmd::state_show(address, opts), parse::state_show).await
    }

    pub async fn taint(&self, name: &str, opts: cmd::TaintOpts) -> Result<String> {
        self.exec(&cmd::taint(name, opts)).await
    }

    pub async fn untaint(&self, name: &str, opts: cmd::UntaintOpts) -> Result<String> {
        self.exec(&cmd::untaint(name, opts)).await
    }

    pub async fn validate(&self, dir: Option<&str>, opts: cmd::ValidateOpts) -> Result<String> {
        self.exec(&cmd::validate(dir, opts)).await
    }

    pub async fn workspace_list(&self) -> Result<Vec<parse::Workspace>> {
        self.exec_parsed(&cmd::workspace_list(), |raw| Ok(parse::workspace_list(raw)))
            .await
    }

    pub async fn workspace_select(&self, name: &str) -> Result<String> {
        self.exec(&cmd::workspace_select(name)).await
    }

    pub async fn workspace_new(&self, name: &str, opts: cmd::WorkspaceNewOpts) -> Result<String> {
        self.exec(&cmd::workspace_new(name, opts)).await
    }

    pub async fn workspace_delete(
        &self,
        name: &str,
        opts: cmd::WorkspaceDeleteOpts,
    ) -> Result<String> {
        self.exec(&cmd::workspace_delete(name, opts)).await
    }

    pub async fn workspace_show(&self) -> Result<String> {
        self.exec_parsed(&cmd::workspace_show(), |raw| Ok(parse::workspace_show(raw)))
            .await
    }
}
