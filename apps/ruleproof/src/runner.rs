//! Fixture runner: batch analysis of a known-good directory.
//!
//! Every immediate entry of the fixture directory goes to the engine in a
//! single invocation. Some lint rules are stateful across a batch
//! (cross-file consistency checks), so per-file invocations would
//! under-test the rule set.

use crate::engine::AnalysisEngine;
use crate::error::{HarnessError, Result};
use crate::models::Report;
use crate::output::render_findings;
use std::fs;
use std::path::{Path, PathBuf};

/// The input path sequence paired with the report it produced.
///
/// Fixture sets are read fresh from disk per run and never cached; holding
/// the inputs alongside the report is what makes positional verification
/// possible afterwards.
#[derive(Debug)]
pub struct FixtureRun {
    pub inputs: Vec<PathBuf>,
    pub report: Report,
}

/// Analyze every immediate entry of `dir` in one engine invocation.
///
/// `dir` is canonicalized first; entries are sorted by name so the input
/// order (and therefore the report's result order) is deterministic. No
/// recursion and no extension filtering: everything in the fixture
/// directory is ground truth.
pub fn run_fixture_set(engine: &dyn AnalysisEngine, dir: &Path) -> Result<FixtureRun> {
    let root = fs::canonicalize(dir).map_err(|e| HarnessError::FixtureRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let entries = fs::read_dir(&root).map_err(|e| HarnessError::FixtureRead {
        path: root.clone(),
        source: e,
    })?;
    let mut inputs: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| HarnessError::FixtureRead {
            path: root.clone(),
            source: e,
        })?;
        inputs.push(entry.path());
    }
    inputs.sort();
    let report = engine.analyze_files(&inputs)?;
    Ok(FixtureRun { inputs, report })
}

impl FixtureRun {
    /// Verify the clean-run invariants.
    ///
    /// The report must have one result per input, both aggregate counts at
    /// zero, every finding list empty, and each result path must end with
    /// the input path at the same position.
    pub fn verify_clean(&self) -> Result<()> {
        if self.report.results.len() != self.inputs.len() {
            return Err(HarnessError::ResultCountMismatch {
                expected: self.inputs.len(),
                actual: self.report.results.len(),
            });
        }
        if self.report.error_count != 0
            || self.report.warning_count != 0
            || self.report.results.iter().any(|r| !r.findings.is_empty())
        {
            return Err(HarnessError::DirtyReport {
                errors: self.report.error_count,
                warnings: self.report.warning_count,
                fired: render_findings(&self.report),
            });
        }
        for (index, (input, result)) in self
            .inputs
            .iter()
            .zip(self.report.results.iter())
            .enumerate()
        {
            let expected = input.to_string_lossy().to_string();
            if !result.file_path.ends_with(&expected) {
                return Err(HarnessError::PathMismatch {
                    index,
                    expected,
                    actual: result.file_path.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Run the fixture set and verify it comes back clean.
pub fn check_fixture_set(engine: &dyn AnalysisEngine, dir: &Path) -> Result<FixtureRun> {
    let run = run_fixture_set(engine, dir)?;
    run.verify_clean()?;
    Ok(run)
}
