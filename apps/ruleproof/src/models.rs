//! Shared data models for engine reports.
//!
//! The wire form is camelCase JSON (`results`, `errorCount`, `ruleId`, ...)
//! so a subprocess engine can emit reports directly from its JSON formatter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Severity attached to a finding by the engine.
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One flagged issue with rule identifier, severity, and location.
pub struct Finding {
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Findings for a single analyzed input, identified by resolved path.
///
/// Text-snippet analysis produces exactly one synthetic entry.
pub struct FileResult {
    pub file_path: String,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Structured result of one engine invocation.
///
/// `results` ordering corresponds positionally to the order in which the
/// inputs were supplied to the engine.
pub struct Report {
    pub results: Vec<FileResult>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl Report {
    /// Build a report from per-file results, computing aggregate counts.
    pub fn from_results(results: Vec<FileResult>) -> Self {
        let mut errors = 0usize;
        let mut warnings = 0usize;
        for fr in &results {
            for f in &fr.findings {
                match f.severity {
                    Severity::Error => errors += 1,
                    Severity::Warning => warnings += 1,
                }
            }
        }
        Report {
            results,
            error_count: errors,
            warning_count: warnings,
        }
    }

    /// Rule identifiers present anywhere in the report, deduplicated.
    pub fn rule_ids(&self) -> BTreeSet<String> {
        self.results
            .iter()
            .flat_map(|fr| fr.findings.iter())
            .map(|f| f.rule_id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_wire_shape_parses() {
        let raw = r#"{
            "results": [
                {
                    "filePath": "/tmp/fixtures/a.js",
                    "findings": [
                        {"ruleId": "camelcase", "severity": "error", "message": "Identifier 'my_x' is not in camel case.", "line": 1, "column": 5}
                    ]
                },
                {"filePath": "/tmp/fixtures/b.js", "findings": []}
            ],
            "errorCount": 1,
            "warningCount": 0
        }"#;
        let report: Report = serde_json::from_str(raw).unwrap();
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].findings[0].rule_id, "camelcase");
        assert_eq!(report.results[0].findings[0].severity, Severity::Error);
        assert_eq!(report.error_count, 1);
    }

    #[test]
    fn test_from_results_counts_severities() {
        let report = Report::from_results(vec![FileResult {
            file_path: "<text>".into(),
            findings: vec![
                Finding {
                    rule_id: "no-tabs".into(),
                    severity: Severity::Error,
                    message: "Unexpected tab character.".into(),
                    line: 2,
                    column: 1,
                },
                Finding {
                    rule_id: "max-len".into(),
                    severity: Severity::Warning,
                    message: "Line too long.".into(),
                    line: 1,
                    column: 81,
                },
            ],
        }]);
        assert_eq!(report.error_count, 1);
        assert_eq!(report.warning_count, 1);
    }

    #[test]
    fn test_rule_ids_deduplicates_across_results() {
        let finding = |rule: &str| Finding {
            rule_id: rule.into(),
            severity: Severity::Error,
            message: String::new(),
            line: 1,
            column: 1,
        };
        let report = Report::from_results(vec![
            FileResult {
                file_path: "a.js".into(),
                findings: vec![finding("curly"), finding("no-tabs")],
            },
            FileResult {
                file_path: "b.js".into(),
                findings: vec![finding("curly")],
            },
        ]);
        let ids: Vec<String> = report.rule_ids().into_iter().collect();
        assert_eq!(ids, vec!["curly".to_string(), "no-tabs".to_string()]);
    }
}
