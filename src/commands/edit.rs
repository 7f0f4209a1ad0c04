//! `kb edit` command - edit an example, or a note by its full path
//!
//! With `--create`, a missing example is created, and notes or fetched pages
//! are copied into the examples directory before editing.

use serde_json::json;

use kb_core::config::KbConfig;
use kb_core::editor::Editor;
use kb_core::error::Result;
use kb_core::ops::{self, EditOutcome};
use kb_core::sniff::TextSniffer;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, print_records_header, record_field};

/// Execute the edit command
pub fn execute(
    cli: &Cli,
    config: &KbConfig,
    editor: &dyn Editor,
    sniffer: &dyn TextSniffer,
    name: &str,
    create: bool,
) -> Result<()> {
    let outcome = if create {
        ops::create_or_edit(config, editor, sniffer, name)?
    } else {
        EditOutcome::Edited {
            path: ops::edit(config, editor, sniffer, name)?,
        }
    };

    match cli.format {
        OutputFormat::Json => print_json(&json!({ "status": "ok", "outcome": outcome }))?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}", describe(&outcome));
            }
        }
        OutputFormat::Records => {
            print_records_header("edit", &[]);
            println!("R {}", outcome_record(&outcome));
        }
    }

    Ok(())
}

fn describe(outcome: &EditOutcome) -> String {
    match outcome {
        EditOutcome::Created { path } => format!("Created {}", path.display()),
        EditOutcome::Copied { from, path } => {
            format!("Copied {} to {}", from.display(), path.display())
        }
        EditOutcome::Edited { path } => format!("Edited {}", path.display()),
    }
}

fn outcome_record(outcome: &EditOutcome) -> String {
    let path = record_field("path", &outcome.path().display().to_string());
    match outcome {
        EditOutcome::Created { .. } => format!("action=created {path}"),
        EditOutcome::Copied { from, .. } => format!(
            "action=copied {} {path}",
            record_field("from", &from.display().to_string())
        ),
        EditOutcome::Edited { .. } => format!("action=edited {path}"),
    }
}
