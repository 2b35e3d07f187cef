//! Output formats shared by every drills command
//!
//! `human` prints for a terminal, `json` prints one pretty document on
//! stdout, and `records` prints an `H` header followed by one prefixed line
//! per result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DrillsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Records,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Human,
        OutputFormat::Json,
        OutputFormat::Records,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Records => "records",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = DrillsError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DrillsError::UnknownFormat(wanted.to_lowercase()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap a records field in double quotes, escaping any quotes inside it
pub fn quote_field(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        if c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case_and_padding() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" records ".parse::<OutputFormat>().unwrap(), OutputFormat::Records);
    }

    #[test]
    fn test_display_parses_back() {
        for format in OutputFormat::ALL {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "YAML".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, DrillsError::UnknownFormat(ref f) if f == "yaml"));
    }

    #[test]
    fn test_quote_field() {
        assert_eq!(quote_field(r#"Bacon, "Kev""#), r#""Bacon, \"Kev\"""#);
        assert_eq!(quote_field(""), r#""""#);
    }
}
