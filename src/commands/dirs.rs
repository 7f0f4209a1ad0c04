//! `kb dirs` command - list the knowledge directories

use kb_core::config::KbConfig;
use kb_core::error::Result;
use kb_core::resource::knowledge_dirs;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, print_records_header, record_field};

/// Execute the dirs command
pub fn execute(cli: &Cli, config: &KbConfig, annotate: bool) -> Result<()> {
    let dirs = knowledge_dirs(config);

    match cli.format {
        OutputFormat::Json => print_json(&dirs)?,
        OutputFormat::Human => {
            for dir in &dirs {
                if annotate {
                    println!("{dir}");
                } else {
                    println!("{}", dir.path.display());
                }
            }
        }
        OutputFormat::Records => {
            print_records_header("dirs", &[("dirs", dirs.len().to_string())]);
            for dir in &dirs {
                let path = dir.path.display().to_string();
                let mut line = format!("D {}", record_field("path", &path));
                if let Some(label) = dir.label {
                    line.push_str(&format!(" label={label}"));
                }
                println!("{line}");
            }
        }
    }

    Ok(())
}
