//! `kb create` command - open a new example in the editor

use serde_json::json;

use kb_core::config::KbConfig;
use kb_core::editor::Editor;
use kb_core::error::Result;
use kb_core::ops;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json_status, print_records_header, record_field};

/// Execute the create command
pub fn execute(cli: &Cli, config: &KbConfig, editor: &dyn Editor, name: &str) -> Result<()> {
    let path = ops::create(config, editor, name)?;
    let path = path.display().to_string();

    match cli.format {
        OutputFormat::Json => print_json_status("created", None, &[("path", json!(path))])?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Created {path}");
            }
        }
        OutputFormat::Records => {
            print_records_header("create", &[]);
            println!("R action=created {}", record_field("path", &path));
        }
    }

    Ok(())
}
