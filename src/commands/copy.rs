//! `kb copy` command - copy a file
//!
//! Both paths get the same `~` and `$VAR` expansion as the configured roots.

use serde_json::json;

use kb_core::config::expand_path;
use kb_core::error::Result;
use kb_core::ops;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json_status, print_records_header, record_field};

/// Execute the copy command
pub fn execute(cli: &Cli, src: &str, dst: &str) -> Result<()> {
    let from = expand_path(src)?;
    let to = expand_path(dst)?;
    let bytes = ops::copy(&from, &to)?;

    let (from, to) = (from.display().to_string(), to.display().to_string());
    match cli.format {
        OutputFormat::Json => print_json_status(
            "copied",
            None,
            &[("from", json!(from)), ("to", json!(to)), ("bytes", json!(bytes))],
        )?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Copied {from} to {to}");
            }
        }
        OutputFormat::Records => {
            print_records_header("copy", &[("bytes", bytes.to_string())]);
            println!(
                "R action=copied {} {}",
                record_field("from", &from),
                record_field("to", &to)
            );
        }
    }

    Ok(())
}
