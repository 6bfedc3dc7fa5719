// src/exec/invocation.rs

//! Fully resolved spawn descriptors and execution results.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tokio::io::AsyncWrite;

use crate::cmd::{Command, tokens};
use crate::config::Config;

/// Everything needed to spawn one terraform process: the program, the
/// flattened argument vector, and the working directory / environment
/// overrides. Constructed once per call and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub env: Option<BTreeMap<String, String>>,
}

impl Invocation {
    /// Resolve a command descriptor against an executor config. This
    /// is where the `-no-color` policy is applied.
    pub fn resolve(config: &Config, cmd: &Command) -> Self {
        Invocation {
            program: config.path.clone(),
            args: tokens::to_argv(cmd, config.no_color),
            cwd: config.cwd.clone(),
            env: config.env.clone(),
        }
    }

    /// An invocation from raw tokens, bypassing command serialization.
    pub fn raw<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            env: None,
        }
    }

    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }
}

/// Captured output of a successful run. Both streams are carried;
/// callers that only care about stdout use [`ExecOutput::into_stdout`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn into_stdout(self) -> String {
        self.stdout
    }
}

/// A live-output destination. Each chunk received from the child is
/// written through before it is buffered for the final result.
pub type Sink = Box<dyn AsyncWrite + Send + Unpin>;

/// Optional write-through sinks for one invocation.
#[derive(Default)]
pub struct Sinks {
    pub stdout: Option<Sink>,
    pub stderr: Option<Sink>,
}

impl Sinks {
    pub fn none() -> Self {
        Sinks::default()
    }

    pub fn stdout(sink: impl AsyncWrite + Send + Unpin + 'static) -> Self {
        Sinks { stdout: Some(Box::new(sink)), stderr: None }
    }

    pub fn with_stderr(mut self, sink: impl AsyncWrite + Send + Unpin + 'static) -> Self {
        self.stderr = Some(Box::new(sink));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd;

    #[test]
    fn resolve_applies_no_color_policy() {
        let cmd = cmd::workspace_list();

        let with = Invocation::resolve(&Config::default(), &cmd);
        assert_eq!(with.args, vec!["workspace", "list", "-no-color"]);

        let without = Invocation::resolve(&Config::default().no_color(false), &cmd);
        assert_eq!(without.args, vec!["workspace", "list"]);
    }

    #[test]
    fn resolve_copies_program_cwd_and_env() {
        let mut env = BTreeMap::new();
        env.insert("TF_IN_AUTOMATION".to_string(), "1".to_string());
        let config = Config::with_path("/opt/tf/terraform").cwd("/srv/infra").env(env.clone());

        let inv = Invocation::resolve(&config, &cmd::state_pull());
        assert_eq!(inv.program, "/opt/tf/terraform");
        assert_eq!(inv.cwd.as_deref(), Some(std::path::Path::new("/srv/infra")));
        assert_eq!(inv.env, Some(env));
    }
}
