//! Literal text search across a scope
//!
//! A linear scan: every text resource in the scope is read line by line and
//! each line containing the term (case-sensitive, no patterns) is kept.

use std::fs;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::KbConfig;
use crate::resource::{self, ResourceEntry, Scope};
use crate::sniff::TextSniffer;
use crate::trace_time;

/// Lines of one resource that matched the term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub entry: ResourceEntry,
    pub lines: Vec<String>,
}

/// Search every text resource of `scope` for `term`.
///
/// Hits come back in listing order; resources without a matching line are
/// left out, so an empty result just means nothing matched.
pub fn search(
    config: &KbConfig,
    sniffer: &dyn TextSniffer,
    scope: Scope,
    term: &str,
    include_web: bool,
) -> Vec<SearchHit> {
    let start = Instant::now();
    let listing = resource::list(config, scope, include_web);

    let hits: Vec<SearchHit> = listing
        .into_iter()
        .filter(|entry| sniffer.is_text(&entry.path))
        .filter_map(|entry| {
            let lines = matching_lines(&entry, term)?;
            (!lines.is_empty()).then_some(SearchHit { entry, lines })
        })
        .collect();

    debug!(%scope, term, hits = hits.len(), "search");
    trace_time!(start, "search");
    hits
}

fn matching_lines(entry: &ResourceEntry, term: &str) -> Option<Vec<String>> {
    let bytes = match fs::read(&entry.path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %entry.path.display(), error = %e, "Failed to read resource");
            return None;
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    Some(
        text.lines()
            .filter(|line| line.contains(term))
            .map(String::from)
            .collect(),
    )
}
