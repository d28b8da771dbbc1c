/// User interface and status output utilities
///
/// This module handles:
/// - Serialized console output
/// - Colored terminal text
/// - Status message and run summary formatting
use crate::report::StatusSummary;
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

/// Execute a function with exclusive access to console output
fn status_lock<F>(f: F)
where
    F: FnOnce(),
{
    lazy_static! {
        static ref LOCK: Mutex<()> = Mutex::new(());
    }
    let _guard = LOCK.lock();
    f();
}

/// Print colored text to terminal, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        print!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        let Some(mut t) = term::stdout() else {
            return false;
        };
        if t.fg(fg).is_err() {
            return false;
        }
        let _ = t.attr(term::Attr::Bold);
        if write!(t, "{}", s).is_err() {
            return false;
        }
        let _ = t.reset();
        true
    }
}

/// Print a status message with "ctit: " prefix
pub fn status(s: &str) {
    status_lock(|| {
        println!("ctit: {}", s);
    });
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    status_lock(|| {
        println!();
        print_color("error", term::color::BRIGHT_RED);
        println!(": {}", msg);
        println!();
    });
}

/// Format the per-status project counts printed after a report run
pub fn format_summary(summary: &StatusSummary) -> String {
    format!(
        "=== Summary ===\n\
         ✅ Pass:     {}\n\
         ⚠️ Warnings: {}\n\
         ❌ Fail:     {}\n\
         💥 Crash:    {}\n\
         Total:       {}",
        summary.passed, summary.warnings, summary.failed, summary.crashed, summary.total
    )
}

/// Print the per-status project counts
pub fn print_summary(summary: &StatusSummary) {
    status_lock(|| {
        println!("\n{}", format_summary(summary));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary_lists_every_status() {
        let summary = StatusSummary { passed: 3, warnings: 2, failed: 1, crashed: 0, total: 6 };
        let text = format_summary(&summary);
        assert!(text.starts_with("=== Summary ===\n"));
        assert!(text.contains("✅ Pass:     3"));
        assert!(text.contains("⚠️ Warnings: 2"));
        assert!(text.contains("❌ Fail:     1"));
        assert!(text.contains("💥 Crash:    0"));
        assert!(text.ends_with("Total:       6"));
    }
}
