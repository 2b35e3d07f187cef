//! Shared output helpers for commands

use drills_core::error::Result;
use serde::Serialize;

/// Pretty-print any serializable value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the records header line
///
/// # Examples
/// ```ignore
/// print_records_header("bfs", &[("start", "\"John\"")]);
/// ```
pub fn print_records_header(mode: &str, extra_fields: &[(&str, String)]) {
    let mut parts = vec!["H drills=1 records=1".to_string(), format!("mode={}", mode)];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    println!("{}", parts.join(" "));
}

/// Quote a label for records output
pub fn quoted(s: &str) -> String {
    drills_core::format::quote_field(s)
}

/// Format a float without trailing zeros noise, two decimals at most
pub fn number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}
