// src/cmd/mod.rs

//! Command descriptors and their serialization to argv tokens.
//!
//! A [`Command`] is the structured representation of one terraform
//! invocation before it is flattened into an argument vector:
//!
//! - the subcommand name (possibly multi-word, e.g. `"state show"`),
//! - an ordered list of options (emission order = insertion order),
//! - positional arguments.
//!
//! - [`tokens`] holds the flag-name normalization and the descriptor →
//!   argv assembly rules.
//! - [`catalog`] enumerates the supported subcommands, each with its
//!   own statically typed option set.
//!
//! Most callers construct commands through [`catalog`]; the raw
//! builder methods on [`Command`] exist for subcommands or flags the
//! catalog does not know about.

pub mod catalog;
pub mod tokens;

pub use catalog::*;
pub use tokens::normalize_key;

/// Value carried by a single option.
///
/// `Flag` is a presence-only option: the flag token is emitted bare,
/// with no `=value` suffix. `List` emits one `flag=element` token per
/// element, preserving element order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptValue {
    Flag,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl From<bool> for OptValue {
    fn from(v: bool) -> Self {
        OptValue::Bool(v)
    }
}

impl From<i64> for OptValue {
    fn from(v: i64) -> Self {
        OptValue::Int(v)
    }
}

impl From<&str> for OptValue {
    fn from(v: &str) -> Self {
        OptValue::Str(v.to_string())
    }
}

impl From<String> for OptValue {
    fn from(v: String) -> Self {
        OptValue::Str(v)
    }
}

impl From<Vec<String>> for OptValue {
    fn from(v: Vec<String>) -> Self {
        OptValue::List(v)
    }
}

impl From<&[&str]> for OptValue {
    fn from(v: &[&str]) -> Self {
        OptValue::List(v.iter().map(|s| s.to_string()).collect())
    }
}

/// One terraform invocation prior to serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    opts: Vec<(String, OptValue)>,
    args: Vec<String>,
}

impl Command {
    /// Create a command for the given subcommand name.
    ///
    /// Multi-word names ("workspace list") are split on whitespace
    /// during serialization, yielding the leading argv tokens.
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            opts: Vec::new(),
            args: Vec::new(),
        }
    }

    /// Append an option. Keys are normalized to kebab-case flag names
    /// at serialization time, so both `"lockTimeout"` and
    /// `"lock-timeout"` produce `-lock-timeout`.
    pub fn opt(mut self, key: impl Into<String>, value: impl Into<OptValue>) -> Self {
        self.opts.push((key.into(), value.into()));
        self
    }

    /// Append a presence-only flag (no `=value` suffix).
    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.opts.push((key.into(), OptValue::Flag));
        self
    }

    /// Append a positional argument. Blank and whitespace-only
    /// arguments are dropped during serialization.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several positional arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn opts(&self) -> &[(String, OptValue)] {
        &self.opts
    }

    pub fn positional_args(&self) -> &[String] {
        &self.args
    }

    /// Serialize to argv tokens without any global flag.
    ///
    /// The `-no-color` policy lives on [`crate::config::Config`]; use
    /// [`tokens::to_argv`] to render with it.
    pub fn to_args(&self) -> Vec<String> {
        tokens::to_argv(self, false)
    }
}
