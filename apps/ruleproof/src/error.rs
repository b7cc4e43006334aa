//! Harness error taxonomy.
//!
//! Every variant is terminal for the enclosing operation: nothing is caught
//! and retried internally, and there is no fallback configuration.

use std::path::PathBuf;

/// Ruleproof error types.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Fixture directory missing or unreadable.
    #[error("fixture directory unreadable: {}: {source}", .path.display())]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine's rule-set configuration file is absent.
    #[error("engine configuration not found: {}", .path.display())]
    ConfigurationMissing { path: PathBuf },

    /// The engine process could not run or failed without producing a report.
    #[error("engine invocation failed: {message}")]
    Engine { message: String },

    /// Engine stdout was not a valid JSON report.
    #[error("engine emitted a malformed report: {source}")]
    MalformedReport {
        #[source]
        source: serde_json::Error,
    },

    /// Expected rule identifier absent from the findings.
    ///
    /// `fired` renders what the engine actually flagged, so a misspelled
    /// identifier or a rule-set change can be diagnosed from the message.
    #[error("rule '{rule}' did not fire; findings were:\n{fired}")]
    RuleNotFired { rule: String, fired: String },

    /// Report length does not match the number of supplied inputs.
    #[error("report has {actual} results for {expected} inputs")]
    ResultCountMismatch { expected: usize, actual: usize },

    /// Clean run expected but the engine flagged something.
    #[error("expected a clean report, got {errors} errors and {warnings} warnings:\n{fired}")]
    DirtyReport {
        errors: usize,
        warnings: usize,
        fired: String,
    },

    /// Result path does not correspond to the input at the same position.
    #[error("result {index}: path '{actual}' does not correspond to input '{expected}'")]
    PathMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
}

/// Result type using the harness error.
pub type Result<T> = std::result::Result<T, HarnessError>;
