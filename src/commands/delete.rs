//! `kb delete` command - remove an example (no undo)

use serde_json::json;

use kb_core::config::KbConfig;
use kb_core::error::Result;
use kb_core::ops;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json_status, print_records_header, record_field};

/// Execute the delete command
pub fn execute(cli: &Cli, config: &KbConfig, name: &str) -> Result<()> {
    let path = ops::delete(config, name)?;
    let path = path.display().to_string();

    match cli.format {
        OutputFormat::Json => print_json_status("deleted", None, &[("path", json!(path))])?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Deleted {path}");
            }
        }
        OutputFormat::Records => {
            print_records_header("delete", &[]);
            println!("R action=deleted {}", record_field("path", &path));
        }
    }

    Ok(())
}
