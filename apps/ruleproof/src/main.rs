//! Ruleproof CLI binary entry point.
//! Delegates to modules for fixture and snippet runs and prints results.

mod cli;
mod config;
mod engine;
mod error;
mod models;
mod output;
mod runner;
mod snippet;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use engine::ProcessEngine;
use error::HarnessError;
use std::io::Read;

/// Build the subprocess engine from resolved config, or exit 2 with a
/// friendly message when the engine is not configured.
fn engine_or_exit(eff: &config::Effective) -> ProcessEngine {
    if !eff.program_configured {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            "Engine is not configured. Pass --program or add ruleproof.toml."
        );
        std::process::exit(2);
    }
    if !eff.engine_config_configured {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            "Engine rule set is not configured. Pass --engine-config or set [engine].config."
        );
        std::process::exit(2);
    }
    if config::load_config(&eff.repo_root).is_none() {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            "No ruleproof.toml found; using defaults."
        );
    }
    ProcessEngine::new(
        eff.program.clone(),
        eff.args.clone(),
        eff.repo_root.join(&eff.engine_config),
    )
}

/// Exit code for a harness error: 1 for conformance failures, 2 for
/// environment/configuration problems.
fn exit_code_for(err: &HarnessError) -> i32 {
    match err {
        HarnessError::RuleNotFired { .. }
        | HarnessError::DirtyReport { .. }
        | HarnessError::ResultCountMismatch { .. }
        | HarnessError::PathMismatch { .. } => 1,
        _ => 2,
    }
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Fixtures {
            repo_root,
            dir,
            output,
            program,
            engine_config,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                program.as_deref(),
                engine_config.as_deref(),
                dir.as_deref(),
                output.as_deref(),
            );
            let engine = engine_or_exit(&eff);
            let fixtures_dir = eff.repo_root.join(&eff.fixtures);
            match runner::check_fixture_set(&engine, &fixtures_dir) {
                Ok(run) => {
                    output::print_report(&run.report, &eff.output);
                    if eff.output != "json" {
                        eprintln!(
                            "{} {}",
                            utils::info_prefix(),
                            format!("{} fixture files passed cleanly", run.inputs.len())
                        );
                    }
                }
                Err(err) => {
                    eprintln!("{} {}", utils::error_prefix(), err);
                    std::process::exit(exit_code_for(&err));
                }
            }
        }
        Commands::Snippet {
            repo_root,
            rule,
            source,
            output,
            program,
            engine_config,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                program.as_deref(),
                engine_config.as_deref(),
                None,
                output.as_deref(),
            );
            let engine = engine_or_exit(&eff);
            let text = match source {
                Some(s) => s,
                None => {
                    let mut buf = String::new();
                    if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                        eprintln!(
                            "{} {}",
                            utils::error_prefix(),
                            format!("failed to read snippet from stdin: {e}")
                        );
                        std::process::exit(2);
                    }
                    buf
                }
            };
            match snippet::assert_rule_fires(&engine, &text, &rule) {
                Ok(found) => {
                    if eff.output == "json" {
                        println!(
                            "{}",
                            serde_json::json!({
                                "rule": rule,
                                "fired": true,
                                "line": found.line,
                                "column": found.column,
                                "message": found.message,
                            })
                        );
                    } else {
                        println!(
                            "rule '{}' fired at {}:{} — {}",
                            rule, found.line, found.column, found.message
                        );
                    }
                }
                Err(err) => {
                    eprintln!("{} {}", utils::error_prefix(), err);
                    std::process::exit(exit_code_for(&err));
                }
            }
        }
    }
}
