//! Analysis engine seam: trait plus subprocess and canned adapters.
//!
//! `ProcessEngine` shells out to the external linting tool with an explicit
//! rule-set path; `ScriptedEngine` replays configured findings so the harness
//! itself can be exercised without any tool installed. One engine per
//! invocation; running several engines side by side is out of scope.

use crate::error::{HarnessError, Result};
use crate::models::{FileResult, Finding, Report, Severity};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// External analysis engine consumed by the harness.
///
/// Both operations are synchronous request/response calls with no streaming.
/// Implementations must be independent across invocations so a parallel test
/// runner can call them concurrently.
pub trait AnalysisEngine {
    /// Analyze a batch of files in one invocation, preserving input order.
    fn analyze_files(&self, paths: &[PathBuf]) -> Result<Report>;

    /// Analyze an in-memory snippet, producing a single synthetic result.
    fn analyze_text(&self, source: &str) -> Result<Report>;
}

/// Subprocess adapter for an external linting tool.
///
/// File mode appends the resolved paths as arguments; text mode passes the
/// snippet on stdin behind a `--stdin` flag. The rule-set path is always
/// handed over explicitly via `--config` rather than discovered from the
/// working directory, and its existence is checked before spawning.
pub struct ProcessEngine {
    program: String,
    args: Vec<String>,
    config: PathBuf,
}

impl ProcessEngine {
    pub fn new(program: impl Into<String>, args: Vec<String>, config: impl AsRef<Path>) -> Self {
        ProcessEngine {
            program: program.into(),
            args,
            config: config.as_ref().to_path_buf(),
        }
    }

    fn ensure_config(&self) -> Result<()> {
        if self.config.is_file() {
            Ok(())
        } else {
            Err(HarnessError::ConfigurationMissing {
                path: self.config.clone(),
            })
        }
    }

    fn invoke(&self, extra: &[String], stdin_text: Option<&str>) -> Result<Report> {
        self.ensure_config()?;
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg("--config")
            .arg(&self.config)
            .args(extra)
            .stdin(if stdin_text.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        let mut child = cmd.spawn().map_err(|e| HarnessError::Engine {
            message: format!("failed to spawn '{}': {}", self.program, e),
        })?;
        if let Some(text) = stdin_text {
            if let Some(mut sin) = child.stdin.take() {
                // An engine that fails fast may close stdin before the
                // snippet is written; the report or stderr tells that story.
                if let Err(err) = sin.write_all(text.as_bytes()) {
                    if err.kind() != std::io::ErrorKind::BrokenPipe {
                        return Err(HarnessError::Engine {
                            message: format!("failed to write snippet to engine stdin: {err}"),
                        });
                    }
                }
            }
        }
        let out = child.wait_with_output().map_err(|e| HarnessError::Engine {
            message: format!("failed to collect output from '{}': {}", self.program, e),
        })?;
        let stdout = String::from_utf8_lossy(&out.stdout);
        match serde_json::from_str::<Report>(&stdout) {
            Ok(report) => Ok(report),
            // Linters conventionally exit non-zero when findings exist, so
            // the exit status alone is not a failure.
            Err(err) if out.status.success() => Err(HarnessError::MalformedReport { source: err }),
            Err(err) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                if stderr.trim().is_empty() {
                    Err(HarnessError::MalformedReport { source: err })
                } else {
                    Err(HarnessError::Engine {
                        message: stderr.trim().to_string(),
                    })
                }
            }
        }
    }
}

impl AnalysisEngine for ProcessEngine {
    fn analyze_files(&self, paths: &[PathBuf]) -> Result<Report> {
        let extra: Vec<String> = paths
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect();
        self.invoke(&extra, None)
    }

    fn analyze_text(&self, source: &str) -> Result<Report> {
        self.invoke(&["--stdin".to_string()], Some(source))
    }
}

/// Synthetic path reported for text-snippet analysis.
pub const TEXT_INPUT_PATH: &str = "<text>";

/// In-memory engine replaying configured findings.
///
/// Keyed by exact snippet text (`analyze_text`) or by file path suffix
/// (`analyze_files`); everything else comes back clean. Carries no lint
/// logic of its own, only canned data, which keeps it honest as a stand-in
/// for the real tool.
#[derive(Default)]
pub struct ScriptedEngine {
    text_findings: Vec<(String, Vec<Finding>)>,
    file_findings: Vec<(String, Vec<Finding>)>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        ScriptedEngine::default()
    }

    /// Register findings for an exact snippet text.
    pub fn on_text(mut self, source: &str, findings: Vec<Finding>) -> Self {
        self.text_findings.push((source.to_string(), findings));
        self
    }

    /// Shorthand: one error-severity finding for `rule_id` at 1:1.
    pub fn text_rule(self, source: &str, rule_id: &str) -> Self {
        let finding = Finding {
            rule_id: rule_id.to_string(),
            severity: Severity::Error,
            message: format!("{rule_id} fired"),
            line: 1,
            column: 1,
        };
        self.on_text(source, vec![finding])
    }

    /// Register findings for any file whose path ends with `suffix`.
    pub fn on_file(mut self, suffix: &str, findings: Vec<Finding>) -> Self {
        self.file_findings.push((suffix.to_string(), findings));
        self
    }
}

impl AnalysisEngine for ScriptedEngine {
    fn analyze_files(&self, paths: &[PathBuf]) -> Result<Report> {
        let results = paths
            .iter()
            .map(|p| {
                let path = p.to_string_lossy().to_string();
                let findings = self
                    .file_findings
                    .iter()
                    .find(|(suffix, _)| path.ends_with(suffix))
                    .map(|(_, f)| f.clone())
                    .unwrap_or_default();
                FileResult {
                    file_path: path,
                    findings,
                }
            })
            .collect();
        Ok(Report::from_results(results))
    }

    fn analyze_text(&self, source: &str) -> Result<Report> {
        let findings = self
            .text_findings
            .iter()
            .find(|(text, _)| text == source)
            .map(|(_, f)| f.clone())
            .unwrap_or_default();
        Ok(Report::from_results(vec![FileResult {
            file_path: TEXT_INPUT_PATH.to_string(),
            findings,
        }]))
    }
}
