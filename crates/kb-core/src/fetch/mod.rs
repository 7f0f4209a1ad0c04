//! Cheat sheet fetching
//!
//! Downloads community cheat sheet repositories as zip archives and merges
//! their pages into flat files under `<examples root>/.web`. Pages append to
//! existing files, so fetching twice without `clean` duplicates content.

mod extract;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::config::KbConfig;
use crate::error::{KbError, Result};

pub use extract::extract;

/// Timeout for a whole archive download
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECONDS: u64 = 300;

/// Largest archive body accepted
pub const MAX_ARCHIVE_BYTES: u64 = 256 * 1024 * 1024;

/// How pages are laid out below a source's prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Pages grouped by platform directory (`common/`, `linux/`, `osx/`, `windows/`)
    Platform,
    /// Pages directly under the prefix
    Flat,
}

/// An archive to download and the part of it to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Source {
    pub url: &'static str,
    /// Path prefix inside the archive
    pub prefix: &'static str,
    pub layout: Layout,
}

/// The cheat sheet collections kb knows how to import
pub const SOURCES: &[Source] = &[
    Source {
        url: "https://github.com/jsonbrazeal/cheat.sheets/archive/master.zip",
        prefix: "cheat.sheets-master/sheets/",
        layout: Layout::Flat,
    },
    Source {
        url: "https://github.com/jsonbrazeal/cheat/archive/master.zip",
        prefix: "cheat-master/cheat/cheatsheets/",
        layout: Layout::Flat,
    },
    Source {
        url: "https://github.com/jsonbrazeal/tldr/archive/master.zip",
        prefix: "tldr-master/pages/",
        layout: Layout::Platform,
    },
    Source {
        url: "https://github.com/jsonbrazeal/eg/archive/master.zip",
        prefix: "eg-master/eg/examples/",
        layout: Layout::Flat,
    },
];

/// Retrieves archive bytes for a URL
pub trait Downloader {
    fn download(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP downloader
pub struct HttpDownloader {
    agent: ureq::Agent,
    user_agent: String,
}

impl HttpDownloader {
    pub fn new() -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_DOWNLOAD_TIMEOUT_SECONDS)))
            .build();
        let user_agent = format!("kb/{} ({})", env!("CARGO_PKG_VERSION"), std::env::consts::OS);

        Self {
            agent: ureq::Agent::new_with_config(config),
            user_agent,
        }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str) -> Result<Vec<u8>> {
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(|e| KbError::fetch(url, e))?;

        response
            .body_mut()
            .with_config()
            .limit(MAX_ARCHIVE_BYTES)
            .read_to_vec()
            .map_err(|e| KbError::fetch(url, e))
    }
}

/// Options for [`fetch`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// Remove the bundle before fetching so the result does not accumulate
    pub clean: bool,
}

/// Pages appended from one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    pub url: String,
    pub appended: usize,
}

/// What a fetch did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchSummary {
    pub bundle: PathBuf,
    pub sources: Vec<SourceSummary>,
}

impl FetchSummary {
    pub fn total(&self) -> usize {
        self.sources.iter().map(|s| s.appended).sum()
    }
}

/// Download every source and merge its pages into the bundle.
///
/// The first failing source aborts the fetch; pages already appended stay.
pub fn fetch(
    config: &KbConfig,
    downloader: &dyn Downloader,
    sources: &[Source],
    options: FetchOptions,
) -> Result<FetchSummary> {
    let bundle = config.web_dir();

    if options.clean && bundle.exists() {
        info!(bundle = %bundle.display(), "clean_bundle");
        fs::remove_dir_all(&bundle)?;
    }

    if !bundle.exists() {
        fs::create_dir(&bundle).map_err(|e| {
            KbError::Other(format!(
                "{} did not exist and an error occurred when trying to create it: {e}",
                bundle.display()
            ))
        })?;
    }

    let mut summary = FetchSummary {
        bundle: bundle.clone(),
        sources: Vec::with_capacity(sources.len()),
    };

    for source in sources {
        info!(url = source.url, "fetching");
        let archive = downloader.download(source.url)?;
        let appended = extract(&archive, source, &bundle)?;
        info!(url = source.url, appended, "fetched");

        summary.sources.push(SourceSummary {
            url: source.url.to_string(),
            appended,
        });
    }

    Ok(summary)
}
