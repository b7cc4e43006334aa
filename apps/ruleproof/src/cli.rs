//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ruleproof",
    version,
    about = "Lint rule-set conformance harness",
    long_about = "Ruleproof — verify a shared lint rule set behaves as expected: good fixture files must pass cleanly, and bad snippets must trigger specific named rules.\n\nConfiguration precedence: CLI > ruleproof.toml > defaults.",
    after_help = "Examples:\n  ruleproof fixtures --dir test/good\n  ruleproof snippet --rule curly 'if (foo) foo++;'\n  echo 'var a = 4  + 3;' | ruleproof snippet --rule no-multi-spaces",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for fixture and snippet conformance runs.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current ruleproof version."
    )]
    Version,
    /// Verify the good-fixture directory passes cleanly
    #[command(
        about = "Run the good-fixture set",
        long_about = "Analyze every file in the fixture directory in one engine invocation and verify a clean report that maps back to the inputs.",
        after_help = "Examples:\n  ruleproof fixtures --dir test/good\n  ruleproof fixtures --output json"
    )]
    Fixtures {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Fixture directory, relative to the repo root")]
        dir: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Engine program to spawn (required)")]
        program: Option<String>,
        #[arg(long, help = "Engine rule-set path passed via --config (required)")]
        engine_config: Option<String>,
    },
    /// Verify a named rule fires on an inline snippet
    #[command(
        about = "Assert a rule fires on a snippet",
        long_about = "Analyze a source snippet (argument or stdin) and fail unless the report contains a finding with the expected rule identifier. Other rules firing too never fail the check.",
        after_help = "Examples:\n  ruleproof snippet --rule camelcase \"var my_favorite_color = '#112C85';\"\n  printf 'if (foo) foo++;' | ruleproof snippet --rule curly"
    )]
    Snippet {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Expected rule identifier")]
        rule: String,
        #[arg(help = "Source snippet (reads stdin when omitted)")]
        source: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Engine program to spawn (required)")]
        program: Option<String>,
        #[arg(long, help = "Engine rule-set path passed via --config (required)")]
        engine_config: Option<String>,
    },
}
