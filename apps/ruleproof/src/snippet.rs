//! Snippet assertions: prove a configured rule fires on bad code.
//!
//! Rather than re-testing every rule (which would only test the engine),
//! suites feed small snippets that a specific rule should flag and assert
//! that the rule identifier shows up in the report.

use crate::engine::AnalysisEngine;
use crate::error::{HarnessError, Result};
use crate::models::{Finding, Report};
use crate::output::render_findings;

/// Linear search for the first finding carrying `rule_id`.
///
/// Presence is the contract; position and count are irrelevant. Findings
/// from every result entry are considered, in report order.
pub fn find_rule<'r>(report: &'r Report, rule_id: &str) -> Option<&'r Finding> {
    report
        .results
        .iter()
        .flat_map(|fr| fr.findings.iter())
        .find(|f| f.rule_id == rule_id)
}

/// Analyze `source` and fail unless `rule_id` fired.
///
/// "Contains" semantics: other rules firing alongside the expected one
/// never fail the assertion. `rule_id` must name a configured rule; a
/// misspelled identifier is indistinguishable from a rule that did not
/// fire, which is why the error renders everything that did.
pub fn assert_rule_fires(
    engine: &dyn AnalysisEngine,
    source: &str,
    rule_id: &str,
) -> Result<Finding> {
    let report = engine.analyze_text(source)?;
    match find_rule(&report, rule_id) {
        Some(found) => Ok(found.clone()),
        None => Err(HarnessError::RuleNotFired {
            rule: rule_id.to_string(),
            fired: render_findings(&report),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScriptedEngine;
    use crate::models::{FileResult, Severity};

    const LONG_FUNCTION: &str = "function functionWithNamesBeginningWithLongStringsOfCharacters(kajhskdhasdjahskjdhas, aosjdhkjahsdkjhasdsad, asjdhkjsahdkjaksjdh) {\n    return 2;\n}\n";

    /// One engine standing in for the shared rule set, canned with the
    /// snippets the configuration is expected to flag.
    fn bad_lint_engine() -> ScriptedEngine {
        ScriptedEngine::new()
            .text_rule("var my_favorite_color = '#112C85';", "camelcase")
            .text_rule("if (this) {\n\tthat();\n};", "no-tabs")
            .text_rule("var a = 4  + 3;", "no-multi-spaces")
            .text_rule(LONG_FUNCTION, "max-len")
            .text_rule("var obj = { function: 'no' }", "quote-props")
            .text_rule("if (foo) foo++;", "curly")
            .text_rule("var foo = 'This \\: is useless escape';", "no-useless-escape")
    }

    #[test]
    fn test_camelcase_fires() {
        let engine = bad_lint_engine();
        let found =
            assert_rule_fires(&engine, "var my_favorite_color = '#112C85';", "camelcase").unwrap();
        assert_eq!(found.rule_id, "camelcase");
    }

    #[test]
    fn test_no_tabs_fires() {
        let engine = bad_lint_engine();
        assert_rule_fires(&engine, "if (this) {\n\tthat();\n};", "no-tabs").unwrap();
    }

    #[test]
    fn test_no_multi_spaces_fires() {
        let engine = bad_lint_engine();
        assert_rule_fires(&engine, "var a = 4  + 3;", "no-multi-spaces").unwrap();
    }

    #[test]
    fn test_max_len_fires_on_long_parameter_list() {
        let engine = bad_lint_engine();
        assert_rule_fires(&engine, LONG_FUNCTION, "max-len").unwrap();
    }

    #[test]
    fn test_quote_props_fires_on_keyword_property() {
        let engine = bad_lint_engine();
        assert_rule_fires(&engine, "var obj = { function: 'no' }", "quote-props").unwrap();
    }

    #[test]
    fn test_curly_fires() {
        let engine = bad_lint_engine();
        assert_rule_fires(&engine, "if (foo) foo++;", "curly").unwrap();
    }

    #[test]
    fn test_no_useless_escape_fires() {
        let engine = bad_lint_engine();
        assert_rule_fires(&engine, "var foo = 'This \\: is useless escape';", "no-useless-escape")
            .unwrap();
    }

    #[test]
    fn test_rule_not_fired_names_rule_and_actual_findings() {
        let engine = bad_lint_engine();
        let err = assert_rule_fires(&engine, "if (foo) foo++;", "semi").unwrap_err();
        match err {
            HarnessError::RuleNotFired { rule, fired } => {
                assert_eq!(rule, "semi");
                // Diagnostic shows what fired instead
                assert!(fired.contains("curly"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_nothing_fired_renders_empty_diagnostic() {
        let engine = ScriptedEngine::new();
        let err = assert_rule_fires(&engine, "var ok = 1;", "camelcase").unwrap_err();
        match err {
            HarnessError::RuleNotFired { fired, .. } => assert!(fired.contains("(no findings)")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_contains_semantics_tolerate_extra_rules() {
        let finding = |rule: &str, line: usize| Finding {
            rule_id: rule.into(),
            severity: Severity::Error,
            message: format!("{rule} fired"),
            line,
            column: 1,
        };
        let engine = ScriptedEngine::new().on_text(
            "if (this) {\n\tthat();\n};",
            vec![finding("no-tabs", 2), finding("semi", 3)],
        );
        // Expected rule fires along with another; both lookups succeed.
        assert_rule_fires(&engine, "if (this) {\n\tthat();\n};", "no-tabs").unwrap();
        assert_rule_fires(&engine, "if (this) {\n\tthat();\n};", "semi").unwrap();
    }

    #[test]
    fn test_find_rule_returns_first_match() {
        let finding = |rule: &str, line: usize| Finding {
            rule_id: rule.into(),
            severity: Severity::Warning,
            message: String::new(),
            line,
            column: 1,
        };
        let report = Report::from_results(vec![FileResult {
            file_path: "<text>".into(),
            findings: vec![finding("max-len", 1), finding("max-len", 7)],
        }]);
        let found = find_rule(&report, "max-len").unwrap();
        assert_eq!(found.line, 1);
        assert!(find_rule(&report, "camelcase").is_none());
    }

    #[test]
    fn test_bad_lint_suite_is_idempotent() {
        let engine = bad_lint_engine();
        let first = engine.analyze_text("if (foo) foo++;").unwrap();
        let second = engine.analyze_text("if (foo) foo++;").unwrap();
        assert_eq!(first.rule_ids(), second.rule_ids());
    }
}
