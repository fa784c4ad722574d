//! Final run report
//!
//! Renders the run ledger into the summary shown after every run: what
//! worked, what failed, and the follow-up actions that are on the operator
//! rather than the tool.

use crate::executor::RunReport;
use std::fmt::Write;

/// Render the report as human-readable text.
pub fn render(report: &RunReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "=".repeat(60));
    if report.is_clean() {
        let _ = writeln!(out, "🎉 SETUP COMPLETE!");
    } else {
        let _ = writeln!(out, "⚠ SETUP FINISHED WITH ISSUES");
    }
    let _ = writeln!(out, "{}", "=".repeat(60));

    if !report.successes.is_empty() {
        let _ = writeln!(out, "\n✓ Successfully installed/configured:");
        for item in &report.successes {
            let _ = writeln!(out, "   • {}", item);
        }
    }

    if !report.failures.is_empty() {
        let _ = writeln!(out, "\n✗ Failed:");
        for item in &report.failures {
            let _ = writeln!(out, "   • {}", item);
        }
    }

    let _ = writeln!(out, "\nNext steps:");
    let _ = writeln!(
        out,
        "1. Restart your terminal so PATH and profile changes take effect"
    );
    let _ = writeln!(out, "2. Open iTerm2 and check your Oh My Zsh prompt");
    let _ = writeln!(
        out,
        "3. Open VS Code and finish configuring the Claude Code extension"
    );
    let _ = writeln!(
        out,
        "4. Run 'claude' in a project directory to start Claude Code"
    );
    let _ = writeln!(out, "5. Verify GitHub access with: gh auth status");

    if !report.failures.is_empty() {
        let _ = writeln!(
            out,
            "\nRe-run this tool and select only the failed steps to retry them;"
        );
        let _ = writeln!(
            out,
            "completed steps detect their own work and are safe to repeat."
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_clean_run() {
        let report = RunReport {
            successes: vec!["Homebrew installed".to_string()],
            failures: vec![],
        };
        let text = render(&report);
        assert!(text.contains("SETUP COMPLETE"));
        assert!(text.contains("• Homebrew installed"));
        assert!(!text.contains("Failed:"));
        assert!(text.contains("Next steps:"));
    }

    #[test]
    fn test_render_separates_failures_from_successes() {
        let report = RunReport {
            successes: vec!["Homebrew installed".to_string()],
            failures: vec!["VS Code installation failed".to_string()],
        };
        let text = render(&report);
        assert!(text.contains("SETUP FINISHED WITH ISSUES"));
        assert!(text.contains("✓ Successfully installed/configured:"));
        assert!(text.contains("✗ Failed:"));
        assert!(text.contains("• VS Code installation failed"));
        assert!(text.contains("select only the failed steps"));
    }
}
