//! Quiet-mode gate and color helpers for CLI output
//!
//! This module provides the environment-driven quiet switch and the small
//! color palette used throughout the koan CLI.

use colored::{ColoredString, Colorize};

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("KOAN_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (function names, keywords)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Returns a colored pass/fail icon for a rule outcome.
pub fn rule_icon(passed: bool) -> ColoredString {
    if passed {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_is_quiet_env_values() {
        std::env::remove_var("KOAN_QUIET");
        assert!(!is_quiet());

        std::env::set_var("KOAN_QUIET", "1");
        assert!(is_quiet());

        std::env::set_var("KOAN_QUIET", "TRUE");
        assert!(is_quiet());

        std::env::set_var("KOAN_QUIET", "0");
        assert!(!is_quiet());

        std::env::remove_var("KOAN_QUIET");
    }

    #[test]
    fn test_rule_icon() {
        rule_icon(true);
        rule_icon(false);
    }

    #[test]
    fn test_separator() {
        assert_eq!(format::separator(5), "─────");
        assert_eq!(format::separator(0), "");
    }
}
