//! CLI output formatting and destinations.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Values longer than this are elided outside verbose mode.
pub const TRUNCATE_DIGITS: usize = 100;

const EDGE_DIGITS: usize = 40;

/// Render a numeric string for display, eliding the middle of very long
/// values unless `verbose` is set.
#[must_use]
pub fn format_result(value: &str, verbose: bool) -> String {
    let len = value.len();
    if verbose || len <= TRUNCATE_DIGITS || !value.is_ascii() {
        return value.to_string();
    }
    format!(
        "{}...{} ({} digits)",
        &value[..EDGE_DIGITS],
        &value[len - EDGE_DIGITS..],
        format_count(len)
    )
}

/// Human-readable elapsed time.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    match d.as_micros() {
        us @ 0..=999 => format!("{us}µs"),
        1_000..=999_999 => format!("{:.2}ms", d.as_secs_f64() * 1e3),
        _ => format!("{:.3}s", d.as_secs_f64()),
    }
}

/// Group digits in threes: `1234567` -> `1,234,567`.
#[must_use]
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Write `bytes` to `path`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written or stdout is closed.
pub fn emit(path: Option<&Path>, bytes: &[u8]) -> io::Result<()> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "writing output file");
            fs::write(path, bytes)
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_are_untouched() {
        assert_eq!(format_result("-12345", false), "-12345");
    }

    #[test]
    fn long_values_are_elided() {
        let value = "9".repeat(250);
        let shown = format_result(&value, false);
        assert!(shown.ends_with("(250 digits)"));
        assert!(shown.contains("..."));
        assert_eq!(format_result(&value, true), value);
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_micros(7)), "7µs");
        assert_eq!(format_duration(Duration::from_millis(42)), "42.00ms");
        assert_eq!(format_duration(Duration::from_secs(3)), "3.000s");
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(123_456), "123,456");
    }

    #[test]
    fn emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        emit(Some(&path), b"57\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "57\n");
    }
}
