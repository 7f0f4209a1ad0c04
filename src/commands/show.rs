//! `kb show` command - print a resource
//!
//! A missing resource prints nothing and is not an error.

use console::Style;
use serde_json::json;
use tracing::debug;

use kb_core::config::KbConfig;
use kb_core::error::Result;
use kb_core::ops;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, print_records_header, record_field};

/// Execute the show command
pub fn execute(cli: &Cli, config: &KbConfig, name: &str) -> Result<()> {
    let content = ops::read(config, name)?;

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "name": name,
            "found": content.is_some(),
            "content": content,
        }))?,
        OutputFormat::Human => match content {
            Some(content) => print!("{}", render(&content, config.colors())),
            None => debug!(name, "show_not_found"),
        },
        OutputFormat::Records => {
            print_records_header(
                "show",
                &[("found", content.is_some().to_string())],
            );
            if let Some(content) = content {
                println!("R {}", record_field("name", name));
                for line in content.lines() {
                    println!("L {}", record_field("text", line));
                }
            }
        }
    }

    Ok(())
}

/// Light markdown styling: headings bold, code fences dimmed
fn render(content: &str, colors: bool) -> String {
    if !colors {
        return content.to_string();
    }

    let heading = Style::new().bold();
    let fence = Style::new().dim();
    let mut out = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        let (text, newline) = match line.strip_suffix('\n') {
            Some(text) => (text, "\n"),
            None => (line, ""),
        };
        let trimmed = text.trim_start();
        if trimmed.starts_with('#') {
            out.push_str(&heading.apply_to(text).to_string());
        } else if trimmed.starts_with("```") {
            out.push_str(&fence.apply_to(text).to_string());
        } else {
            out.push_str(text);
        }
        out.push_str(newline);
    }
    out
}
