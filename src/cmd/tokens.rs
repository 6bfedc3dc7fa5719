// src/cmd/tokens.rs

//! Descriptor → argv token assembly.
//!
//! Token order is fixed: subcommand words, option tokens in insertion
//! order, the global `-no-color` token (when requested), then
//! positional arguments with blank entries filtered out. The produced
//! sequence never contains an empty or whitespace-only token.

use crate::cmd::{Command, OptValue};

/// Normalize an option key to terraform's kebab-case flag spelling:
/// a `-` is inserted before each ASCII uppercase letter and the result
/// is lowercased (`lockTimeout` → `lock-timeout`).
///
/// The transformation is deterministic and idempotent; keys that are
/// already kebab-case pass through unchanged.
pub fn normalize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Emit the token(s) for a single option.
fn opt_tokens(key: &str, value: &OptValue, out: &mut Vec<String>) {
    let flag = format!("-{}", normalize_key(key));

    match value {
        OptValue::Flag => out.push(flag),
        OptValue::Bool(b) => out.push(format!("{flag}={b}")),
        OptValue::Int(n) => out.push(format!("{flag}={n}")),
        OptValue::Str(s) => out.push(format!("{flag}={s}")),
        OptValue::List(items) => {
            for item in items {
                out.push(format!("{flag}={item}"));
            }
        }
    }
}

/// Flatten a [`Command`] into the argument vector passed to process
/// creation.
pub fn to_argv(cmd: &Command, no_color: bool) -> Vec<String> {
    let mut out: Vec<String> = cmd
        .name()
        .split_whitespace()
        .map(|s| s.to_string())
        .collect();

    for (key, value) in cmd.opts() {
        opt_tokens(key, value, &mut out);
    }

    if no_color {
        out.push("-no-color".to_string());
    }

    out.extend(
        cmd.positional_args()
            .iter()
            .filter(|a| !a.trim().is_empty())
            .cloned(),
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::Command;

    #[test]
    fn normalize_inserts_dash_before_each_uppercase() {
        assert_eq!(normalize_key("lockTimeout"), "lock-timeout");
        assert_eq!(normalize_key("backupOut"), "backup-out");
        assert_eq!(normalize_key("state"), "state");
        assert_eq!(normalize_key("allow-missing"), "allow-missing");
    }

    #[test]
    fn normalize_is_idempotent() {
        for key in ["lockTimeout", "state", "backup-out", "varFile"] {
            let once = normalize_key(key);
            assert_eq!(normalize_key(&once), once);
        }
    }

    #[test]
    fn multiword_name_splits_into_leading_tokens() {
        let cmd = Command::new("state list");
        assert_eq!(to_argv(&cmd, false), vec!["state", "list"]);
    }

    #[test]
    fn presence_flag_emits_bare_token() {
        let cmd = Command::new("taint").flag("allowMissing").arg("aws_instance.foo");
        assert_eq!(
            to_argv(&cmd, false),
            vec!["taint", "-allow-missing", "aws_instance.foo"]
        );
    }

    #[test]
    fn scalar_values_coerce_to_flag_eq_value() {
        let cmd = Command::new("apply")
            .opt("lock", false)
            .opt("parallelism", 4)
            .opt("state", "prod.tfstate");
        assert_eq!(
            to_argv(&cmd, false),
            vec!["apply", "-lock=false", "-parallelism=4", "-state=prod.tfstate"]
        );
    }

    #[test]
    fn list_value_emits_one_token_per_element_in_order() {
        let cmd = Command::new("plan").opt(
            "var",
            vec!["a=1".to_string(), "b=2".to_string(), "c=3".to_string()],
        );
        assert_eq!(
            to_argv(&cmd, false),
            vec!["plan", "-var=a=1", "-var=b=2", "-var=c=3"]
        );
    }

    #[test]
    fn opts_keep_insertion_order() {
        let cmd = Command::new("apply")
            .opt("stateOut", "out.tfstate")
            .flag("autoApprove")
            .opt("backup", "b.tfstate");
        assert_eq!(
            to_argv(&cmd, false),
            vec!["apply", "-state-out=out.tfstate", "-auto-approve", "-backup=b.tfstate"]
        );
    }

    #[test]
    fn blank_positionals_are_dropped() {
        let cmd = Command::new("show").args(["", "  ", "plan.out", "\t"]);
        let argv = to_argv(&cmd, false);
        assert_eq!(argv, vec!["show", "plan.out"]);
        assert!(argv.iter().all(|t| !t.trim().is_empty()));
    }

    #[test]
    fn no_color_sits_between_opts_and_positionals() {
        let cmd = Command::new("taint").flag("allow-missing").arg("aws_instance.foo");
        assert_eq!(
            to_argv(&cmd, true),
            vec!["taint", "-allow-missing", "-no-color", "aws_instance.foo"]
        );
        assert_eq!(to_argv(&Command::new("state list"), true), vec![
            "state", "list", "-no-color"
        ]);
    }
}
