//! Configuration discovery and effective settings resolution.
//!
//! Ruleproof reads `ruleproof.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `fixtures`: `fixtures/good`
//! - `output`: `human`
//! - `[engine].args`: empty
//!
//! The engine program and its rule-set path have no defaults; commands that
//! need them fail early when unconfigured. The rule-set path is handed to
//! the engine explicitly rather than discovered from the process working
//! directory.
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Engine invocation section under `[engine]`.
pub struct EngineCfg {
    /// Program to spawn, e.g. "demolint"
    pub program: Option<String>,
    /// Fixed arguments placed before the harness-provided ones
    #[serde(default)]
    pub args: Option<Vec<String>>,
    /// Rule-set path passed via `--config`, relative to the repo root
    pub config: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `ruleproof.toml|yaml`.
pub struct RuleproofConfig {
    pub fixtures: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub engine: Option<EngineCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub program: String,
    pub program_configured: bool,
    pub args: Vec<String>,
    pub engine_config: String,
    pub engine_config_configured: bool,
    pub fixtures: String,
    pub output: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `ruleproof.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    // Walk up to find config or .git; else return start
    let mut cur = start;
    loop {
        if cur.join("ruleproof.toml").exists()
            || cur.join("ruleproof.yaml").exists()
            || cur.join("ruleproof.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `RuleproofConfig` from `ruleproof.toml` or `ruleproof.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<RuleproofConfig> {
    let toml_path = root.join("ruleproof.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: RuleproofConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["ruleproof.yaml", "ruleproof.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: RuleproofConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_program: Option<&str>,
    cli_engine_config: Option<&str>,
    cli_fixtures: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let program_src = cli_program
        .map(|s| s.to_string())
        .or_else(|| cfg.engine.as_ref().and_then(|e| e.program.clone()));
    let (program, program_configured) = match program_src {
        Some(s) => (s, true),
        None => (String::new(), false),
    };

    let args = cfg
        .engine
        .as_ref()
        .and_then(|e| e.args.clone())
        .unwrap_or_default();

    let engine_config_src = cli_engine_config
        .map(|s| s.to_string())
        .or_else(|| cfg.engine.as_ref().and_then(|e| e.config.clone()));
    let (engine_config, engine_config_configured) = match engine_config_src {
        Some(s) => (s, true),
        None => (String::new(), false),
    };

    let fixtures = cli_fixtures
        .map(|s| s.to_string())
        .or(cfg.fixtures)
        .unwrap_or_else(|| "fixtures/good".to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        repo_root,
        program,
        program_configured,
        args,
        engine_config,
        engine_config_configured,
        fixtures,
        output,
    }
}
