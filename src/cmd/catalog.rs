// src/cmd/catalog.rs

//! The closed set of supported terraform subcommands.
//!
//! Each subcommand gets a constructor plus an options struct whose
//! fields enumerate exactly the flags that subcommand recognizes.
//! Flag names are stored in terraform's exact kebab-case spelling
//! (note `-detailed-exitcode`, not `-detailed-exit-code`), so a wrong
//! flag name is unrepresentable without going through the raw
//! [`Command::opt`](crate::cmd::Command::opt) escape hatch.
//!
//! Option kinds map as: `Option<String>` → `-flag=value`,
//! `Option<bool>` → `-flag=true|false`, `Option<i64>` → `-flag=N`,
//! `bool` → presence-only flag, `Vec<String>` → one `-flag=element`
//! token per element.

use crate::cmd::Command;

fn opt_str(cmd: Command, key: &str, v: Option<String>) -> Command {
    match v {
        Some(s) => cmd.opt(key, s),
        None => cmd,
    }
}

fn opt_bool(cmd: Command, key: &str, v: Option<bool>) -> Command {
    match v {
        Some(b) => cmd.opt(key, b),
        None => cmd,
    }
}

fn opt_int(cmd: Command, key: &str, v: Option<i64>) -> Command {
    match v {
        Some(n) => cmd.opt(key, n),
        None => cmd,
    }
}

fn opt_flag(cmd: Command, key: &str, present: bool) -> Command {
    if present { cmd.flag(key) } else { cmd }
}

fn opt_list(cmd: Command, key: &str, v: Vec<String>) -> Command {
    if v.is_empty() { cmd } else { cmd.opt(key, v) }
}

fn maybe_arg(cmd: Command, arg: Option<&str>) -> Command {
    match arg {
        Some(a) => cmd.arg(a),
        None => cmd,
    }
}

/// Options shared by `terraform apply` and `terraform destroy`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOpts {
    pub backup: Option<String>,
    pub lock: Option<bool>,
    pub lock_timeout: Option<String>,
    /// Presence flag: skip interactive approval of the plan.
    pub auto_approve: bool,
    pub parallelism: Option<i64>,
    pub refresh: Option<bool>,
    pub state: Option<String>,
    pub state_out: Option<String>,
    pub target: Vec<String>,
    pub var: Vec<String>,
    pub var_file: Option<String>,
}

pub type DestroyOpts = ApplyOpts;

fn apply_like(name: &str, dir_or_plan: Option<&str>, opts: ApplyOpts) -> Command {
    let mut cmd = Command::new(name);
    cmd = opt_str(cmd, "backup", opts.backup);
    cmd = opt_bool(cmd, "lock", opts.lock);
    cmd = opt_str(cmd, "lock-timeout", opts.lock_timeout);
    cmd = opt_flag(cmd, "auto-approve", opts.auto_approve);
    cmd = opt_int(cmd, "parallelism", opts.parallelism);
    cmd = opt_bool(cmd, "refresh", opts.refresh);
    cmd = opt_str(cmd, "state", opts.state);
    cmd = opt_str(cmd, "state-out", opts.state_out);
    cmd = opt_list(cmd, "target", opts.target);
    cmd = opt_list(cmd, "var", opts.var);
    cmd = opt_str(cmd, "var-file", opts.var_file);
    maybe_arg(cmd, dir_or_plan)
}

pub fn apply(dir_or_plan: Option<&str>, opts: ApplyOpts) -> Command {
    apply_like("apply", dir_or_plan, opts)
}

pub fn destroy(dir: Option<&str>, opts: DestroyOpts) -> Command {
    apply_like("destroy", dir, opts)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FmtOpts {
    pub list: Option<bool>,
    pub write: Option<bool>,
    pub diff: Option<bool>,
    pub check: Option<bool>,
}

pub fn fmt(dir: Option<&str>, opts: FmtOpts) -> Command {
    let mut cmd = Command::new("fmt");
    cmd = opt_bool(cmd, "list", opts.list);
    cmd = opt_bool(cmd, "write", opts.write);
    cmd = opt_bool(cmd, "diff", opts.diff);
    cmd = opt_bool(cmd, "check", opts.check);
    maybe_arg(cmd, dir)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForceUnlockOpts {
    pub force: Option<bool>,
}

pub fn force_unlock(lock_id: &str, dir: Option<&str>, opts: ForceUnlockOpts) -> Command {
    let mut cmd = Command::new("force-unlock");
    cmd = opt_bool(cmd, "force", opts.force);
    maybe_arg(cmd.arg(lock_id), dir)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOpts {
    /// Presence flag: check already-downloaded modules for updates.
    pub update: bool,
}

pub fn get(dir: Option<&str>, opts: GetOpts) -> Command {
    let cmd = opt_flag(Command::new("get"), "update", opts.update);
    maybe_arg(cmd, dir)
}

/// Graph output flavour for `terraform graph -type=...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphType {
    Plan,
    PlanDestroy,
    Apply,
    Legacy,
}

impl GraphType {
    pub fn as_str(self) -> &'static str {
        match self {
            GraphType::Plan => "plan",
            GraphType::PlanDestroy => "plan-destroy",
            GraphType::Apply => "apply",
            GraphType::Legacy => "legacy",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphOpts {
    /// Presence flag: highlight cycles in the graph.
    pub draw_cycles: bool,
    pub graph_type: Option<GraphType>,
}

pub fn graph(dir: Option<&str>, opts: GraphOpts) -> Command {
    let mut cmd = Command::new("graph");
    cmd = opt_flag(cmd, "draw-cycles", opts.draw_cycles);
    if let Some(t) = opts.graph_type {
        cmd = cmd.opt("type", t.as_str());
    }
    maybe_arg(cmd, dir)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOpts {
    pub backup: Option<String>,
    pub config: Option<String>,
    pub lock: Option<bool>,
    pub lock_timeout: Option<String>,
    pub provider: Option<String>,
    pub state: Option<String>,
    pub state_out: Option<String>,
    pub var: Vec<String>,
    pub var_file: Option<String>,
}

pub fn import(address: &str, id: &str, opts: ImportOpts) -> Command {
    let mut cmd = Command::new("import");
    cmd = opt_str(cmd, "backup", opts.backup);
    cmd = opt_str(cmd, "config", opts.config);
    cmd = opt_bool(cmd, "lock", opts.lock);
    cmd = opt_str(cmd, "lock-timeout", opts.lock_timeout);
    cmd = opt_str(cmd, "provider", opts.provider);
    cmd = opt_str(cmd, "state", opts.state);
    cmd = opt_str(cmd, "state-out", opts.state_out);
    cmd = opt_list(cmd, "var", opts.var);
    cmd = opt_str(cmd, "var-file", opts.var_file);
    cmd.arg(address).arg(id)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOpts {
    pub lock: Option<bool>,
    pub lock_timeout: Option<String>,
    /// Presence flag: upgrade modules and plugins during init.
    pub upgrade: bool,
}

pub fn init(dir: Option<&str>, opts: InitOpts) -> Command {
    let mut cmd = Command::new("init");
    cmd = opt_bool(cmd, "lock", opts.lock);
    cmd = opt_str(cmd, "lock-timeout", opts.lock_timeout);
    cmd = opt_flag(cmd, "upgrade", opts.upgrade);
    maybe_arg(cmd, dir)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOpts {
    /// Presence flag: machine-readable JSON output.
    pub json: bool,
    pub state: Option<String>,
    pub module: Option<String>,
}

pub fn output(name: Option<&str>, opts: OutputOpts) -> Command {
    let mut cmd = Command::new("output");
    cmd = opt_flag(cmd, "json", opts.json);
    cmd = opt_str(cmd, "state", opts.state);
    cmd = opt_str(cmd, "module", opts.module);
    maybe_arg(cmd, name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanOpts {
    /// Presence flag: generate a destroy plan.
    pub destroy: bool,
    /// Presence flag: exit 2 when the diff is non-empty.
    pub detailed_exitcode: bool,
    pub lock: Option<bool>,
    pub lock_timeout: Option<String>,
    pub module_depth: Option<i64>,
    pub out: Option<String>,
    pub parallelism: Option<i64>,
    pub refresh: Option<bool>,
    pub state: Option<String>,
    pub target: Vec<String>,
    pub var: Vec<String>,
    pub var_file: Option<String>,
}

pub fn plan(dir_or_plan: Option<&str>, opts: PlanOpts) -> Command {
    let mut cmd = Command::new("plan");
    cmd = opt_flag(cmd, "destroy", opts.destroy);
    cmd = opt_flag(cmd, "detailed-exitcode", opts.detailed_exitcode);
    cmd = opt_bool(cmd, "lock", opts.lock);
    cmd = opt_str(cmd, "lock-timeout", opts.lock_timeout);
    cmd = opt_int(cmd, "module-depth", opts.module_depth);
    cmd = opt_str(cmd, "out", opts.out);
    cmd = opt_int(cmd, "parallelism", opts.parallelism);
    cmd = opt_bool(cmd, "refresh", opts.refresh);
    cmd = opt_str(cmd, "state", opts.state);
    cmd = opt_list(cmd, "target", opts.target);
    cmd = opt_list(cmd, "var", opts.var);
    cmd = opt_str(cmd, "var-file", opts.var_file);
    maybe_arg(cmd, dir_or_plan)
}

pub fn providers(config_path: Option<&str>) -> Command {
    maybe_arg(Command::new("providers"), config_path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushOpts {
    pub atlas_address: Option<String>,
    pub upload_modules: Option<bool>,
    pub name: Option<String>,
    pub overwrite: Vec<String>,
    pub token: Option<String>,
    pub var: Vec<String>,
    pub var_file: Option<String>,
    pub vcs: Option<bool>,
}

pub fn push(path: Option<&str>, opts: PushOpts) -> Command {
    let mut cmd = Command::new("push");
    cmd = opt_str(cmd, "atlas-address", opts.atlas_address);
    cmd = opt_bool(cmd, "upload-modules", opts.upload_modules);
    cmd = opt_str(cmd, "name", opts.name);
    cmd = opt_list(cmd, "overwrite", opts.overwrite);
    cmd = opt_str(cmd, "token", opts.token);
    cmd = opt_list(cmd, "var", opts.var);
    cmd = opt_str(cmd, "var-file", opts.var_file);
    cmd = opt_bool(cmd, "vcs", opts.vcs);
    maybe_arg(cmd, path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshOpts {
    pub backup: Option<String>,
    pub lock: Option<bool>,
    pub lock_timeout: Option<String>,
    pub state: Option<String>,
    pub state_out: Option<String>,
    pub target: Vec<String>,
    pub var: Vec<String>,
    pub var_file: Option<String>,
}

pub fn refresh(dir: Option<&str>, opts: RefreshOpts) -> Command {
    let mut cmd = Command::new("refresh");
    cmd = opt_str(cmd, "backup", opts.backup);
    cmd = opt_bool(cmd, "lock", opts.lock);
    cmd = opt_str(cmd, "lock-timeout", opts.lock_timeout);
    cmd = opt_str(cmd, "state", opts.state);
    cmd = opt_str(cmd, "state-out", opts.state_out);
    cmd = opt_list(cmd, "target", opts.target);
    cmd = opt_list(cmd, "var", opts.var);
    cmd = opt_str(cmd, "var-file", opts.var_file);
    maybe_arg(cmd, dir)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowOpts {
    pub module_depth: Option<i64>,
}

pub fn show(path: Option<&str>, opts: ShowOpts) -> Command {
    let cmd = opt_int(Command::new("show"), "module-depth", opts.module_depth);
    maybe_arg(cmd, path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateListOpts {
    pub state: Option<String>,
}

pub fn state_list(addresses: &[&str], opts: StateListOpts) -> Command {
    let cmd = opt_str(Command::new("state list"), "state", opts.state);
    cmd.args(addresses.iter().copied())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateMvOpts {
    pub backup: Option<String>,
    pub backup_out: Option<String>,
    pub state: Option<String>,
    pub state_out: Option<String>,
}

pub fn state_mv(src: &str, dest: &str, opts: StateMvOpts) -> Command {
    let mut cmd = Command::new("state mv");
    cmd = opt_str(cmd, "backup", opts.backup);
    cmd = opt_str(cmd, "backup-out", opts.backup_out);
    cmd = opt_str(cmd, "state", opts.state);
    cmd = opt_str(cmd, "state-out", opts.state_out);
    cmd.arg(src).arg(dest)
}

pub fn state_pull() -> Command {
    Command::new("state pull")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePushOpts {
    pub force: Option<bool>,
}

pub fn state_push(path: &str, opts: StatePushOpts) -> Command {
    opt_bool(Command::new("state push"), "force", opts.force).arg(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateRmOpts {
    pub backup: Option<String>,
    pub state: Option<String>,
}

pub fn state_rm(addresses: &[&str], opts: StateRmOpts) -> Command {
    let mut cmd = Command::new("state rm");
    cmd = opt_str(cmd, "backup", opts.backup);
    cmd = opt_str(cmd, "state", opts.state);
    cmd.args(addresses.iter().copied())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateShowOpts {
    pub state: Option<String>,
}

pub fn state_show(address: &str, opts: StateShowOpts) -> Command {
    opt_str(Command::new("state show"), "state", opts.state).arg(address)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaintOpts {
    /// Presence flag: succeed even if the resource is absent.
    pub allow_missing: bool,
    pub backup: Option<String>,
    pub lock: Option<bool>,
    pub lock_timeout: Option<String>,
    pub module: Option<String>,
    pub state: Option<String>,
    pub state_out: Option<String>,
}

pub fn taint(name: &str, opts: TaintOpts) -> Command {
    let mut cmd = Command::new("taint");
    cmd = opt_flag(cmd, "allow-missing", opts.allow_missing);
    cmd = opt_str(cmd, "backup", opts.backup);
    cmd = opt_bool(cmd, "lock", opts.lock);
    cmd = opt_str(cmd, "lock-timeout", opts.lock_timeout);
    cmd = opt_str(cmd, "module", opts.module);
    cmd = opt_str(cmd, "state", opts.state);
    cmd = opt_str(cmd, "state-out", opts.state_out);
    cmd.arg(name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UntaintOpts {
    /// Presence flag: succeed even if the resource is absent.
    pub allow_missing: bool,
    pub backup: Option<String>,
    pub index: Option<i64>,
    pub lock: Option<bool>,
    pub lock_timeout: Option<String>,
    pub module: Option<String>,
    pub state: Option<String>,
    pub state_out: Option<String>,
}

pub fn untaint(name: &str, opts: UntaintOpts) -> Command {
    let mut cmd = Command::new("untaint");
    cmd = opt_flag(cmd, "allow-missing", opts.allow_missing);
    cmd = opt_str(cmd, "backup", opts.backup);
    cmd = opt_int(cmd, "index", opts.index);
    cmd = opt_bool(cmd, "lock", opts.lock);
    cmd = opt_str(cmd, "lock-timeout", opts.lock_timeout);
    cmd = opt_str(cmd, "module", opts.module);
    cmd = opt_str(cmd, "state", opts.state);
    cmd = opt_str(cmd, "state-out", opts.state_out);
    cmd.arg(name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateOpts {
    pub check_variables: Option<bool>,
    pub var: Vec<String>,
    pub var_file: Option<String>,
}

pub fn validate(dir: Option<&str>, opts: ValidateOpts) -> Command {
    let mut cmd = Command::new("validate");
    cmd = opt_bool(cmd, "check-variables", opts.check_variables);
    cmd = opt_list(cmd, "var", opts.var);
    cmd = opt_str(cmd, "var-file", opts.var_file);
    maybe_arg(cmd, dir)
}

pub fn workspace_list() -> Command {
    Command::new("workspace list")
}

pub fn workspace_select(name: &str) -> Command {
    Command::new("workspace select").arg(name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceNewOpts {
    pub state: Option<String>,
}

pub fn workspace_new(name: &str, opts: WorkspaceNewOpts) -> Command {
    opt_str(Command::new("workspace new"), "state", opts.state).arg(name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceDeleteOpts {
    pub force: Option<bool>,
}

pub fn workspace_delete(name: &str, opts: WorkspaceDeleteOpts) -> Command {
    opt_bool(Command::new("workspace delete"), "force", opts.force).arg(name)
}

pub fn workspace_show() -> Command {
    Command::new("workspace show")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_commands_have_expected_tokens() {
        assert_eq!(workspace_list().to_args(), vec!["workspace", "list"]);
        assert_eq!(
            workspace_select("staging").to_args(),
            vec!["workspace", "select", "staging"]
        );
        assert_eq!(
            workspace_new("staging", WorkspaceNewOpts { state: Some("s.tfstate".into()) })
                .to_args(),
            vec!["workspace", "new", "-state=s.tfstate", "staging"]
        );
        assert_eq!(
            workspace_delete("old", WorkspaceDeleteOpts { force: Some(true) }).to_args(),
            vec!["workspace", "delete", "-force=true", "old"]
        );
    }

    #[test]
    fn apply_emits_opts_in_field_order() {
        let cmd = apply(
            Some("plan.out"),
            ApplyOpts {
                lock: Some(false),
                auto_approve: true,
                parallelism: Some(10),
                var: vec!["region=eu".into(), "size=small".into()],
                ..Default::default()
            },
        );
        assert_eq!(
            cmd.to_args(),
            vec![
                "apply",
                "-lock=false",
                "-auto-approve",
                "-parallelism=10",
                "-var=region=eu",
                "-var=size=small",
                "plan.out"
            ]
        );
    }

    #[test]
    fn plan_uses_terraform_exitcode_spelling() {
        let cmd = plan(None, PlanOpts { detailed_exitcode: true, ..Default::default() });
        assert_eq!(cmd.to_args(), vec!["plan", "-detailed-exitcode"]);
    }

    #[test]
    fn force_unlock_orders_lock_id_before_dir() {
        let cmd = force_unlock("abc-123", Some("infra"), ForceUnlockOpts::default());
        assert_eq!(cmd.to_args(), vec!["force-unlock", "abc-123", "infra"]);
    }

    #[test]
    fn import_takes_address_then_id() {
        let cmd = import(
            "aws_instance.web",
            "i-0123",
            ImportOpts { provider: Some("aws.eu".into()), ..Default::default() },
        );
        assert_eq!(
            cmd.to_args(),
            vec!["import", "-provider=aws.eu", "aws_instance.web", "i-0123"]
        );
    }

    #[test]
    fn state_rm_accepts_multiple_addresses() {
        let cmd = state_rm(&["a.b", "c.d"], StateRmOpts::default());
        assert_eq!(cmd.to_args(), vec!["state", "rm", "a.b", "c.d"]);
    }

    #[test]
    fn graph_type_serializes_to_flag_value() {
        let cmd = graph(
            None,
            GraphOpts { draw_cycles: true, graph_type: Some(GraphType::PlanDestroy) },
        );
        assert_eq!(
            cmd.to_args(),
            vec!["graph", "-draw-cycles", "-type=plan-destroy"]
        );
    }

    #[test]
    fn empty_option_structs_contribute_no_tokens() {
        assert_eq!(plan(None, PlanOpts::default()).to_args(), vec!["plan"]);
        assert_eq!(
            state_show("aws_instance.web", StateShowOpts::default()).to_args(),
            vec!["state", "show", "aws_instance.web"]
        );
    }
}
