//! `kb fetch` command - download community cheat sheets
//!
//! Pages are appended to `<examples root>/.web`; run with `--clean` to
//! replace earlier downloads instead of accumulating them.

use kb_core::config::KbConfig;
use kb_core::error::Result;
use kb_core::fetch::{self, Downloader, FetchOptions, Source};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, print_records_header, record_field};

/// Execute the fetch command
pub fn execute(
    cli: &Cli,
    config: &KbConfig,
    downloader: &dyn Downloader,
    sources: &[Source],
    options: FetchOptions,
) -> Result<()> {
    let summary = fetch::fetch(config, downloader, sources, options)?;

    match cli.format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Human => {
            if !cli.quiet {
                for source in &summary.sources {
                    println!("{:>6} pages from {}", source.appended, source.url);
                }
                println!(
                    "Fetched {} pages into {}",
                    summary.total(),
                    summary.bundle.display()
                );
            }
        }
        OutputFormat::Records => {
            print_records_header(
                "fetch",
                &[
                    ("sources", summary.sources.len().to_string()),
                    ("pages", summary.total().to_string()),
                ],
            );
            for source in &summary.sources {
                println!(
                    "S {} appended={}",
                    record_field("url", &source.url),
                    source.appended
                );
            }
        }
    }

    Ok(())
}
