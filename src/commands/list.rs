//! `kb list` command - list resources in a scope
//!
//! Human output is one row per resource: the name (first 40 characters)
//! padded to 45 columns, then the path (first 80 characters).

use kb_core::config::KbConfig;
use kb_core::error::Result;
use kb_core::resource::{self, ResourceEntry, Scope};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, print_records_header, record_field, truncate_chars};

const NAME_WIDTH: usize = 40;
const NAME_COLUMN: usize = 45;
const PATH_WIDTH: usize = 80;

/// Execute the list command
pub fn execute(cli: &Cli, config: &KbConfig, scope: Scope, include_web: bool) -> Result<()> {
    let listing = resource::list(config, scope, include_web);

    match cli.format {
        OutputFormat::Json => print_json(&listing)?,
        OutputFormat::Human => {
            if listing.is_empty() && !cli.quiet {
                eprintln!("No resources found");
            }
            for entry in &listing {
                println!("{}", format_row(entry));
            }
        }
        OutputFormat::Records => {
            print_records_header(
                "list",
                &[
                    ("scope", scope.to_string()),
                    ("web", include_web.to_string()),
                    ("resources", listing.len().to_string()),
                ],
            );
            for entry in &listing {
                println!(
                    "R {} {}",
                    record_field("name", &entry.name),
                    record_field("path", &entry.path.display().to_string())
                );
            }
        }
    }

    Ok(())
}

fn format_row(entry: &ResourceEntry) -> String {
    let path = entry.path.display().to_string();
    format!(
        "{:<width$} {}",
        truncate_chars(&entry.name, NAME_WIDTH),
        truncate_chars(&path, PATH_WIDTH),
        width = NAME_COLUMN
    )
}
