// src/lib.rs

//! `tfexec` drives the Terraform CLI as a subprocess.
//!
//! Three layers:
//!
//! - [`cmd`]: typed command descriptors and their serialization to
//!   argv tokens (`-flag=value` convention, kebab-case flag names).
//! - [`exec`]: the async single-shot process executor — one child per
//!   call, concurrent stdout/stderr capture with optional
//!   write-through sinks, exit-code based success/failure.
//! - [`parse`]: line-oriented parsers for the subcommands whose text
//!   output has a stable shape.
//!
//! [`Terraform`] ties them together: a facade bound to one [`Config`]
//! with a typed method per subcommand.
//!
//! ```no_run
//! use tfexec::{Config, Terraform};
//!
//! # async fn demo() -> tfexec::Result<()> {
//! let tf = Terraform::new(Config::default().cwd("/srv/infra"));
//! for ws in tf.workspace_list().await? {
//!     println!("{}{}", if ws.selected { "* " } else { "  " }, ws.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cmd;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod parse;
pub mod terraform;

pub use cmd::{Command, OptValue};
pub use config::Config;
pub use errors::{Result, TfExecError};
pub use exec::{ExecBackend, ExecOutput, Invocation, ProcessBackend, Sinks};
pub use parse::Workspace;
pub use terraform::Terraform;
