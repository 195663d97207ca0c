//! Styling helpers for terminal output.

use console::style;

/// Colour is off when `NO_COLOR` is set.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// A section header line.
#[must_use]
pub fn header(text: &str) -> String {
    let line = format!("=== {text} ===");
    if is_color_disabled() {
        line
    } else {
        style(line).bold().cyan().to_string()
    }
}

/// A dimmed `label:` prefix.
#[must_use]
pub fn label(text: &str) -> String {
    if is_color_disabled() {
        format!("{text}:")
    } else {
        style(format!("{text}:")).dim().to_string()
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
