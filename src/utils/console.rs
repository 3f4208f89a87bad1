// src/utils/console.rs

//! Console report output with server-style formatting.
//!
//! Diagnostics go through the `log` facade; this module prints the
//! user-facing report of a command (headers, items, summaries).

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;

/// Suppresses all report output when set
static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence or re-enable report output.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn enabled() -> bool {
    !QUIET.load(Ordering::Relaxed)
}

/// Prefix a line with a timestamp and tag.
fn format_line(tag: &str, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{}] [{}] {}", timestamp, tag, message)
}

/// Print a header
pub fn header(title: &str) {
    if enabled() {
        let border = "═".repeat(60);
        println!("{}", border);
        println!("  {}", title);
        println!("{}", border);
    }
}

/// Print a top-level line
pub fn item(message: &str) {
    if enabled() {
        println!("{}", message);
    }
}

/// Print an indented line
pub fn sub_item(message: &str) {
    if enabled() {
        println!("    {}", message);
    }
}

/// Print a success line
pub fn success(message: &str) {
    if enabled() {
        println!("{}", format_line("OK", &format!("✓ {}", message)));
    }
}

/// Print a failure line to stderr
pub fn failure(message: &str) {
    if enabled() {
        eprintln!("{}", format_line("FAIL", &format!("✗ {}", message)));
    }
}

/// Print a separator line
pub fn separator() {
    if enabled() {
        println!("{}", "─".repeat(60));
    }
}

/// Print a summary section
pub fn summary(title: &str, items: &[(&str, String)]) {
    if enabled() {
        println!();
        println!("{}", format_line("SUMMARY", title));
        for (key, value) in items {
            println!("    {}: {}", key, value);
        }
    }
}
