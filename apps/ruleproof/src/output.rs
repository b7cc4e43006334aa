//! Report rendering for the CLI and for assertion diagnostics.
//!
//! Supports `human` (default) and `json` outputs. The JSON form is the
//! report serialized verbatim; `render_findings` produces the plain listing
//! embedded in `RuleNotFired`/`DirtyReport` messages.

use crate::models::{Report, Severity};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print a report in the requested format.
pub fn print_report(report: &Report, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(report)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for fr in &report.results {
                for f in &fr.findings {
                    let (icon, sev) = match f.severity {
                        Severity::Error => {
                            if color {
                                ("✖".red().to_string(), "⟦error⟧".red().bold().to_string())
                            } else {
                                ("✖".to_string(), "⟦error⟧".to_string())
                            }
                        }
                        Severity::Warning => {
                            if color {
                                ("▲".yellow().to_string(), "⟦warn⟧".yellow().bold().to_string())
                            } else {
                                ("▲".to_string(), "⟦warn⟧".to_string())
                            }
                        }
                    };
                    let file = if color {
                        fr.file_path.clone().bold().to_string()
                    } else {
                        fr.file_path.clone()
                    };
                    println!(
                        "{} {} {}:{}:{} ❲{}❳ — {}",
                        icon, sev, file, f.line, f.column, f.rule_id, f.message
                    );
                }
            }
            let summary = format!(
                "— Summary — errors={} warnings={} files={}",
                report.error_count,
                report.warning_count,
                report.results.len()
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Plain, uncolored listing of every finding, for error diagnostics.
pub fn render_findings(report: &Report) -> String {
    let mut out = String::new();
    for fr in &report.results {
        for f in &fr.findings {
            let sev = match f.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            out.push_str(&format!(
                "  {}:{}:{} [{}] {} — {}\n",
                fr.file_path, f.line, f.column, sev, f.rule_id, f.message
            ));
        }
    }
    if out.is_empty() {
        out.push_str("  (no findings)\n");
    }
    out
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    // Directly serialize the report, keeping the camelCase wire shape
    serde_json::to_value(report).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileResult, Finding};

    fn sample_report() -> Report {
        Report::from_results(vec![FileResult {
            file_path: "<text>".into(),
            findings: vec![Finding {
                rule_id: "no-tabs".into(),
                severity: Severity::Error,
                message: "Unexpected tab character.".into(),
                line: 2,
                column: 1,
            }],
        }])
    }

    #[test]
    fn test_compose_report_json_shape() {
        let out = compose_report_json(&sample_report());
        assert_eq!(out["errorCount"], 1);
        assert_eq!(out["warningCount"], 0);
        assert_eq!(out["results"][0]["filePath"], "<text>");
        assert_eq!(out["results"][0]["findings"][0]["ruleId"], "no-tabs");
        assert_eq!(out["results"][0]["findings"][0]["severity"], "error");
    }

    #[test]
    fn test_render_findings_lists_rule_and_location() {
        let text = render_findings(&sample_report());
        assert!(text.contains("[error] no-tabs"));
        assert!(text.contains("<text>:2:1"));
    }

    #[test]
    fn test_render_findings_empty_report() {
        let report = Report::from_results(vec![]);
        assert_eq!(render_findings(&report), "  (no findings)\n");
    }
}
