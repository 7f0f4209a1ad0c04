//! Resources are the files kb knows about
//!
//! A resource is a `(display name, path)` pair discovered by walking one or
//! more roots. Which roots are walked, and which entries survive, depends on
//! the [`Scope`].

pub mod scope;
pub mod walk;

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KbError;

pub use scope::{knowledge_dirs, list, KnowledgeDir};
pub use walk::walk_roots;

/// Extensions recognized as notes
pub const NOTE_EXTENSIONS: &[&str] = &[".md", ".txt"];

/// A discovered resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// Base name of the file
    pub name: String,
    /// Absolute path of the file
    pub path: PathBuf,
}

impl ResourceEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Build an entry from a file path, using its base name as display name
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self::new(name, path))
    }

    /// Whether the display name carries a note extension
    pub fn is_note(&self) -> bool {
        NOTE_EXTENSIONS.iter().any(|ext| self.name.ends_with(ext))
    }

    /// Presentation order key: case-insensitive name, then full path
    fn sort_key(&self) -> (String, &OsStr) {
        (self.name.to_lowercase(), self.path.as_os_str())
    }
}

/// Which part of the knowledge base an operation looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The examples root only
    #[default]
    Examples,
    /// Markdown and text files outside the examples root
    Notes,
    /// The knowledge root and the examples root together
    All,
}

impl FromStr for Scope {
    type Err = KbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "examples" => Ok(Scope::Examples),
            "notes" => Ok(Scope::Notes),
            "all" => Ok(Scope::All),
            other => Err(KbError::UnknownScope(other.to_string())),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Examples => write!(f, "examples"),
            Scope::Notes => write!(f, "notes"),
            Scope::All => write!(f, "all"),
        }
    }
}

/// An ordered set of resources
///
/// Entries are unique by path and always kept in presentation order, so two
/// listings of an unchanged tree compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Listing {
    entries: Vec<ResourceEntry>,
}

impl Listing {
    /// Build a listing, dropping repeated paths and sorting
    pub fn new(mut entries: Vec<ResourceEntry>) -> Self {
        entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        entries.dedup_by(|a, b| a.path == b.path);
        Self { entries }
    }

    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResourceEntry> {
        self.entries.iter()
    }

    /// Keep only entries matching `predicate`
    pub fn retain(&mut self, predicate: impl FnMut(&ResourceEntry) -> bool) {
        self.entries.retain(predicate);
    }

    /// Name lookup table.
    ///
    /// Entries are inserted in presentation order, so when several paths
    /// share a display name the last one in that order wins.
    pub fn index(&self) -> BTreeMap<&str, &ResourceEntry> {
        let mut index = BTreeMap::new();
        for entry in &self.entries {
            index.insert(entry.name.as_str(), entry);
        }
        index
    }

    /// Find the entry whose full path is `path`
    pub fn find_path(&self, path: &Path) -> Option<&ResourceEntry> {
        self.entries.iter().find(|e| e.path == path)
    }
}

impl IntoIterator for Listing {
    type Item = ResourceEntry;
    type IntoIter = std::vec::IntoIter<ResourceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a ResourceEntry;
    type IntoIter = std::slice::Iter<'a, ResourceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
