//! Recursive resource discovery

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::{Listing, ResourceEntry};
use crate::trace_time;

/// Names starting with these prefixes are never listed or descended into
const HIDDEN_PREFIXES: &[&str] = &[".", "__"];

pub fn is_hidden(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    HIDDEN_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// Walk every root and collect the regular files below it.
///
/// Roots are always walked even when hidden themselves; below a root, hidden
/// files and directories are skipped, as is any directory that resolves to
/// one in `excluded`. Roots that are not directories contribute nothing.
pub fn walk_roots(roots: &[PathBuf], excluded: &[PathBuf]) -> Listing {
    let start = Instant::now();
    let mut entries = Vec::new();
    let excluded: Vec<PathBuf> = excluded
        .iter()
        .map(|x| fs::canonicalize(x).unwrap_or_else(|_| x.clone()))
        .collect();

    for root in roots {
        if !root.is_dir() {
            debug!(root = %root.display(), "skip_missing_root");
            continue;
        }

        let walker = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| keep(e, &excluded));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %root.display(), error = %e, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(resource) = ResourceEntry::from_path(entry.path()) {
                entries.push(resource);
            }
        }
    }

    let listing = Listing::new(entries);
    trace_time!(start, "walk_roots", entries = listing.len());
    listing
}

fn keep(entry: &DirEntry, excluded: &[PathBuf]) -> bool {
    if entry.depth() > 0 && is_hidden(entry.file_name()) {
        return false;
    }
    !(entry.file_type().is_dir() && is_excluded(entry.path(), excluded))
}

/// `excluded` holds canonical paths
fn is_excluded(path: &Path, excluded: &[PathBuf]) -> bool {
    if excluded.is_empty() {
        return false;
    }
    let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    excluded.contains(&path)
}
