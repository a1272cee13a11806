//! README documentation-quality gate.
//!
//! Four rules, checked over the raw README text: the file exists and is
//! readable, it carries at least [`MIN_WORDS`] words, it uses strictly more
//! than [`MIN_HEADING_MARKERS`] `#` characters, and it mentions every
//! required topic keyword case-insensitively. The scans are deliberately
//! plain character and word counts rather than a markdown parse; the gate
//! is a threshold heuristic.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::ui;

/// Minimum word count for the README.
pub const MIN_WORDS: usize = 500;

/// The README must contain strictly more `#` characters than this.
pub const MIN_HEADING_MARKERS: usize = 10;

/// Topics the README must mention, matched case-insensitively.
pub const REQUIRED_KEYWORDS: [&str; 8] = [
    "docstring_checker",
    "fibonacci_closure",
    "create_counter",
    "add",
    "mul",
    "div",
    "closure",
    "recursive",
];

/// A single failed rule.
#[derive(Debug, Clone, Serialize)]
pub struct GateIssue {
    /// Short rule identifier: `words`, `headings` or `keywords`
    pub rule: String,
    /// Human-readable description of the failure
    pub message: String,
}

impl GateIssue {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Outcome of running the gate over one README.
#[derive(Debug, Serialize)]
pub struct ReadmeReport {
    /// Whitespace-separated word count
    pub words: usize,
    /// Raw `#` character count
    pub heading_markers: usize,
    /// Required keywords absent from the text
    pub missing_keywords: Vec<String>,
    /// Failed rules, empty when the gate is satisfied
    pub issues: Vec<GateIssue>,
}

impl ReadmeReport {
    /// Whether every rule passed.
    pub fn is_satisfied(&self) -> bool {
        self.issues.is_empty()
    }

    /// Print the report with colored per-rule lines.
    pub fn display(&self) {
        println!(
            "  {} {} words (minimum {})",
            ui::rule_icon(self.words >= MIN_WORDS),
            self.words,
            MIN_WORDS
        );
        println!(
            "  {} {} heading markers (more than {} required)",
            ui::rule_icon(self.heading_markers > MIN_HEADING_MARKERS),
            self.heading_markers,
            MIN_HEADING_MARKERS
        );
        if self.missing_keywords.is_empty() {
            println!(
                "  {} all {} required keywords present",
                ui::rule_icon(true),
                REQUIRED_KEYWORDS.len()
            );
        } else {
            println!(
                "  {} missing keywords: {}",
                ui::rule_icon(false),
                self.missing_keywords.join(", ")
            );
        }
    }
}

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count raw `#` occurrences anywhere in the text.
pub fn heading_marker_count(text: &str) -> usize {
    text.chars().filter(|&c| c == '#').count()
}

/// Required keywords absent from `text`, case-insensitively.
pub fn missing_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    REQUIRED_KEYWORDS
        .iter()
        .filter(|keyword| !lowered.contains(**keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

/// Run every rule over README text already in memory.
pub fn check_text(text: &str) -> ReadmeReport {
    let words = word_count(text);
    let heading_markers = heading_marker_count(text);
    let missing = missing_keywords(text);

    let mut issues = Vec::new();
    if words < MIN_WORDS {
        issues.push(GateIssue::new(
            "words",
            format!("{} words, at least {} required", words, MIN_WORDS),
        ));
    }
    if heading_markers <= MIN_HEADING_MARKERS {
        issues.push(GateIssue::new(
            "headings",
            format!(
                "{} '#' characters, more than {} required",
                heading_markers, MIN_HEADING_MARKERS
            ),
        ));
    }
    if !missing.is_empty() {
        issues.push(GateIssue::new(
            "keywords",
            format!("missing required keywords: {}", missing.join(", ")),
        ));
    }

    ReadmeReport {
        words,
        heading_markers,
        missing_keywords: missing,
        issues,
    }
}

/// Read `path` and run the gate over its contents.
///
/// # Errors
///
/// Fails when the file cannot be read; a missing README is an error, not a
/// report.
pub fn check_readme(path: &Path) -> Result<ReadmeReport> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read README: {}", path.display()))?;
    Ok(check_text(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// A README body that satisfies every rule.
    fn passing_text() -> String {
        let mut text = String::new();
        for i in 0..12 {
            text.push_str(&format!("## Section {}\n", i));
        }
        text.push_str(
            "docstring_checker fibonacci_closure create_counter add mul div \
             closure recursive\n",
        );
        text.push_str(&"filler ".repeat(520));
        text
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("one two  three\nfour"), 4);
    }

    #[test]
    fn test_heading_marker_count_is_a_raw_scan() {
        assert_eq!(heading_marker_count("# one\n## two"), 3);
        // Markers inside code fences still count
        assert_eq!(heading_marker_count("```\n# comment\n```"), 1);
    }

    #[test]
    fn test_missing_keywords_case_insensitive() {
        let text = "DOCSTRING_CHECKER Fibonacci_Closure create_counter \
                    ADD mul div closure recursive";
        assert!(missing_keywords(text).is_empty());
    }

    #[test]
    fn test_missing_keywords_reports_absences() {
        let missing = missing_keywords("closure add mul div");
        assert!(missing.contains(&"docstring_checker".to_string()));
        assert!(missing.contains(&"recursive".to_string()));
        assert!(!missing.contains(&"closure".to_string()));
    }

    #[test]
    fn test_passing_text_satisfies_gate() {
        let report = check_text(&passing_text());
        assert!(report.is_satisfied(), "issues: {:?}", report.issues);
        assert!(report.words >= MIN_WORDS);
        assert!(report.heading_markers > MIN_HEADING_MARKERS);
    }

    #[test]
    fn test_short_text_fails_word_rule() {
        let report = check_text("## a\n".repeat(12).as_str());
        assert!(!report.is_satisfied());
        assert!(report.issues.iter().any(|issue| issue.rule == "words"));
    }

    #[test]
    fn test_exactly_ten_markers_fails_heading_rule() {
        // The rule is strictly more than ten
        let mut text = passing_text().replace('#', "");
        text.push_str(&"#".repeat(10));
        let report = check_text(&text);
        assert_eq!(report.heading_markers, 10);
        assert!(report.issues.iter().any(|issue| issue.rule == "headings"));
    }

    #[test]
    fn test_check_readme_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        fs::write(&path, passing_text()).unwrap();

        let report = check_readme(&path).unwrap();
        assert!(report.is_satisfied());
    }

    #[test]
    fn test_check_readme_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = check_readme(&tmp.path().join("README.md")).unwrap_err();
        assert!(err.to_string().contains("Failed to read README"));
    }

    #[test]
    fn test_report_serializes() {
        let report = check_text("too short");
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"issues\""));
        assert!(json.contains("\"missing_keywords\""));
    }
}
