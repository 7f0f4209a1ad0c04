//! Output format handling for kb
//!
//! - human: readable output for terminal use
//! - json: stable, machine-readable JSON
//! - records: line-oriented output, one record per line

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KbError;

/// Output format for kb commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output for scripts and line tools
    Records,
}

impl FromStr for OutputFormat {
    type Err = KbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(KbError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Escape double quotes so a value can sit inside a quoted records field
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

/// Records header line, e.g. `H kb=1 records=1 mode=list resources=3`
pub fn records_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H kb=1 records=1 mode={mode}");
    for (key, value) in fields {
        line.push_str(&format!(" {key}={value}"));
    }
    line
}
