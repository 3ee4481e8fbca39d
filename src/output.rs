//! Output formatting and styling module.
//!
//! Provides a centralized interface for all CLI output, including colored
//! output and summary formatting. This module abstracts away output details,
//! making it easy to change formatting globally.

use colored::*;

/// Manages all CLI output with consistent styling and formatting.
///
/// This struct provides methods for:
/// - Success messages (green with ✓)
/// - Error messages (red with ✗)
/// - Warning messages (yellow with ⚠)
/// - Info messages (cyan)
/// - A scan summary line
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirsort::output::OutputFormatter;
    /// OutputFormatter::success("Moved report.pdf → Documents/report.pdf");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints the summary line of one scan.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirsort::output::OutputFormatter;
    /// OutputFormatter::scan_summary(4, 1, 0);
    /// ```
    pub fn scan_summary(moved: usize, skipped: usize, failed: usize) {
        let moved_part = format!("{} moved", moved).green().to_string();
        let failed_part = if failed > 0 {
            format!(", {} failed", failed).red().to_string()
        } else {
            String::new()
        };
        println!("\n{}, {} skipped{}", moved_part, skipped, failed_part);
    }
}
