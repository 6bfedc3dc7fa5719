// src/parse/mod.rs

//! Line-oriented parsers for terraform's text output.
//!
//! These are stateless functions applied to captured stdout after a
//! successful run. The shape assumptions are deliberately narrow; a
//! line that violates them surfaces as [`TfExecError::Parse`], which
//! the caller sees as a distinct failure from process failure.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{Result, TfExecError};

/// `* ` marks the currently selected workspace in `workspace list`.
static WORKSPACE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\*\s+)?(.+)$").expect("workspace line regex"));

/// `state show` prints `key = value` attribute lines.
static ATTRIBUTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s+=\s*(.*)$").expect("attribute line regex"));

/// One entry of `terraform workspace list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub name: String,
    pub selected: bool,
}

fn non_blank_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Parse `workspace list` output, preserving listing order and
/// extracting the `* ` selection marker.
pub fn workspace_list(raw: &str) -> Vec<Workspace> {
    non_blank_lines(raw)
        .map(|line| match WORKSPACE_LINE.captures(line) {
            Some(caps) => Workspace {
                name: caps[2].to_string(),
                selected: caps.get(1).is_some(),
            },
            // Non-blank lines always match; keep the line as-is if not.
            None => Workspace { name: line.to_string(), selected: false },
        })
        .collect()
}

/// `workspace show` prints the current workspace name.
pub fn workspace_show(raw: &str) -> String {
    raw.trim().to_string()
}

/// `state list` prints one resource address per line.
pub fn state_list(raw: &str) -> Vec<String> {
    non_blank_lines(raw).map(str::to_string).collect()
}

/// Parse `state show` output into `(attribute, value)` pairs.
pub fn state_show(raw: &str) -> Result<Vec<(String, String)>> {
    non_blank_lines(raw)
        .map(|line| {
            let caps = ATTRIBUTE_LINE
                .captures(line)
                .ok_or_else(|| TfExecError::Parse(format!("not a `key = value` line: {line:?}")))?;
            Ok((caps[1].to_string(), caps[2].to_string()))
        })
        .collect()
}

/// `state pull` prints the full state as JSON.
pub fn state_pull(raw: &str) -> Result<serde_json::Value> {
    Ok(serde_json::from_str(raw)?)
}
