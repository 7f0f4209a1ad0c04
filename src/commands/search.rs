//! `kb search` command - literal text search
//!
//! Human output groups matching lines under a `*****name*****:` heading,
//! indented by two spaces, with a blank line after each resource.

use std::time::Instant;

use console::Style;
use tracing::debug;

use kb_core::config::KbConfig;
use kb_core::error::Result;
use kb_core::resource::Scope;
use kb_core::search::{self, SearchHit};
use kb_core::sniff::TextSniffer;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, print_records_header, record_field};

/// Execute the search command
pub fn execute(
    cli: &Cli,
    config: &KbConfig,
    sniffer: &dyn TextSniffer,
    term: &str,
    scope: Scope,
    include_web: bool,
) -> Result<()> {
    let start = Instant::now();
    let hits = search::search(config, sniffer, scope, term, include_web);

    if cli.verbose {
        debug!(term, %scope, include_web, hits = hits.len(), elapsed = ?start.elapsed(), "search");
    }

    match cli.format {
        OutputFormat::Json => print_json(&hits)?,
        OutputFormat::Human => {
            if hits.is_empty() && !cli.quiet {
                eprintln!("No matches for {term:?}");
            }
            let heading = if config.colors() {
                Style::new().bold()
            } else {
                Style::new()
            };
            for hit in &hits {
                print!("{}", format_hit(hit, &heading));
            }
        }
        OutputFormat::Records => {
            let lines: usize = hits.iter().map(|h| h.lines.len()).sum();
            print_records_header(
                "search",
                &[
                    ("scope", scope.to_string()),
                    ("resources", hits.len().to_string()),
                    ("lines", lines.to_string()),
                ],
            );
            for hit in &hits {
                println!(
                    "R {} {}",
                    record_field("name", &hit.entry.name),
                    record_field("path", &hit.entry.path.display().to_string())
                );
                for line in &hit.lines {
                    println!("L {}", record_field("text", line));
                }
            }
        }
    }

    Ok(())
}

fn format_hit(hit: &SearchHit, heading: &Style) -> String {
    let mut out = format!(
        "{}\n",
        heading.apply_to(format!("*****{}*****:", hit.entry.name))
    );
    for line in &hit.lines {
        out.push_str(&format!("  {line}\n"));
    }
    out.push('\n');
    out
}
