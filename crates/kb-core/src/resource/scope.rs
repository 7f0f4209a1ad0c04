//! Scope classification
//!
//! - `examples`: the examples root
//! - `notes`: `.md`/`.txt` files under the knowledge root, outside the
//!   examples root and the fetched bundle
//! - `all`: the knowledge root and the examples root
//!
//! The fetched bundle (`<examples root>/.web`) only joins `examples` and `all`
//! when asked for.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use super::walk::{is_hidden, walk_roots};
use super::{Listing, ResourceEntry, Scope};
use crate::config::{KbConfig, EX_PATH_VAR, KB_PATH_VAR};

/// List the resources visible in `scope`
pub fn list(config: &KbConfig, scope: Scope, include_web: bool) -> Listing {
    let examples_root = config.examples_root().to_path_buf();
    let knowledge_root = config.knowledge_root().to_path_buf();
    let web_dir = config.web_dir();

    let (mut roots, excluded) = match scope {
        Scope::Examples => (vec![examples_root], Vec::new()),
        Scope::Notes => (vec![knowledge_root], vec![examples_root, web_dir.clone()]),
        Scope::All => (vec![knowledge_root, examples_root], Vec::new()),
    };

    if include_web && scope != Scope::Notes {
        roots.push(web_dir);
    }

    let mut listing = walk_roots(&roots, &excluded);
    if scope == Scope::Notes {
        listing.retain(ResourceEntry::is_note);
    }

    debug!(%scope, include_web, entries = listing.len(), "list_resources");
    listing
}

/// A directory that may hold resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeDir {
    pub path: PathBuf,
    /// Name of the variable configuring this directory, if any
    pub label: Option<&'static str>,
}

impl fmt::Display for KnowledgeDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => write!(f, "{} ({})", self.path.display(), label),
            None => write!(f, "{}", self.path.display()),
        }
    }
}

/// The knowledge root, every visible directory below it, and the examples
/// root, sorted by path.
pub fn knowledge_dirs(config: &KbConfig) -> Vec<KnowledgeDir> {
    let mut paths: Vec<PathBuf> = WalkDir::new(config.knowledge_root())
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.into_path())
        .collect();
    paths.push(config.examples_root().to_path_buf());
    paths.sort();
    paths.dedup();

    paths
        .into_iter()
        .map(|path| {
            let label = if path == config.examples_root() {
                Some(EX_PATH_VAR)
            } else if path == config.knowledge_root() {
                Some(KB_PATH_VAR)
            } else {
                None
            };
            KnowledgeDir { path, label }
        })
        .collect()
}
