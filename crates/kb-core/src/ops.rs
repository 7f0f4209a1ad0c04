//! Resource operations: read, create, edit, delete and copy
//!
//! Writes only ever target the examples root. Notes can be edited in place
//! when addressed by their full path.

use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{expand_path, is_within, KbConfig};
use crate::editor::Editor;
use crate::error::{KbError, Result};
use crate::resource::{self, Listing, ResourceEntry, Scope};
use crate::sniff::TextSniffer;

/// Check that `name` is a plain file name usable inside the examples root
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(MAIN_SEPARATOR);
    if invalid {
        return Err(KbError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Return the content of a resource, or `None` when nothing matches.
///
/// Examples (bundle included) are looked up by display name first, so a
/// local example shadows a fetched page of the same name. Notes match by
/// full path or display name.
pub fn read(config: &KbConfig, name: &str) -> Result<Option<String>> {
    let examples = resource::list(config, Scope::Examples, true);
    if let Some(entry) = examples.index().get(name) {
        return read_entry(entry).map(Some);
    }

    let notes = resource::list(config, Scope::Notes, false);
    match find_note(&notes, name) {
        Some(entry) => read_entry(entry).map(Some),
        None => {
            debug!(name, "resource_not_found");
            Ok(None)
        }
    }
}

fn read_entry(entry: &ResourceEntry) -> Result<String> {
    let bytes = fs::read(&entry.path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn find_note<'a>(notes: &'a Listing, name: &str) -> Option<&'a ResourceEntry> {
    entry_by_path(notes, name).or_else(|| notes.index().get(name).copied())
}

fn entry_by_path<'a>(listing: &'a Listing, name: &str) -> Option<&'a ResourceEntry> {
    let path = expand_path(name).ok()?;
    listing.find_path(&path)
}

/// Open a new example named `name` in the editor
pub fn create(config: &KbConfig, editor: &dyn Editor, name: &str) -> Result<PathBuf> {
    validate_name(name)?;

    let target = config.examples_root().join(name);
    if target.exists() {
        return Err(KbError::already_exists("resource", name));
    }

    editor.open(&target)?;
    info!(path = %target.display(), "create_resource");
    Ok(target)
}

/// Find the file `kb edit` would open.
///
/// A local example (bundle excluded) by display name wins; otherwise a text
/// note addressed by its full path.
pub fn resolve_edit_target(
    config: &KbConfig,
    sniffer: &dyn TextSniffer,
    name: &str,
) -> Result<PathBuf> {
    let examples = resource::list(config, Scope::Examples, false);
    if let Some(entry) = examples.index().get(name) {
        return Ok(entry.path.clone());
    }

    let notes = resource::list(config, Scope::Notes, false);
    match entry_by_path(&notes, name) {
        Some(entry) if sniffer.is_text(&entry.path) => Ok(entry.path.clone()),
        _ => Err(KbError::not_found("resource", name)),
    }
}

/// Open an existing example, or a note by full path, in the editor
pub fn edit(
    config: &KbConfig,
    editor: &dyn Editor,
    sniffer: &dyn TextSniffer,
    name: &str,
) -> Result<PathBuf> {
    let target = resolve_edit_target(config, sniffer, name)?;
    editor.open(&target)?;
    info!(path = %target.display(), "edit_resource");
    Ok(target)
}

/// What [`create_or_edit`] ended up doing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum EditOutcome {
    Created { path: PathBuf },
    Copied { from: PathBuf, path: PathBuf },
    Edited { path: PathBuf },
}

impl EditOutcome {
    pub fn path(&self) -> &Path {
        match self {
            EditOutcome::Created { path }
            | EditOutcome::Copied { path, .. }
            | EditOutcome::Edited { path } => path,
        }
    }
}

/// Edit `name`, creating it or copying it into the examples root first when
/// needed.
///
/// - nothing by that name exists: create it
/// - it exists outside the examples root (a note or a fetched page): copy it
///   into the examples root, then edit the copy
/// - otherwise: edit it
pub fn create_or_edit(
    config: &KbConfig,
    editor: &dyn Editor,
    sniffer: &dyn TextSniffer,
    name: &str,
) -> Result<EditOutcome> {
    if let Ok(path) = resolve_edit_target(config, sniffer, name) {
        if is_within(&path, config.examples_root()) {
            editor.open(&path)?;
            return Ok(EditOutcome::Edited { path });
        }
    }

    let everything = resource::list(config, Scope::All, true);
    let existing = entry_by_path(&everything, name)
        .or_else(|| everything.index().get(name).copied());

    let Some(existing) = existing else {
        let path = create(config, editor, name)?;
        return Ok(EditOutcome::Created { path });
    };

    let path = config.examples_root().join(&existing.name);
    if path.exists() {
        editor.open(&path)?;
        return Ok(EditOutcome::Edited { path });
    }

    copy(&existing.path, &path)?;
    editor.open(&path)?;
    info!(from = %existing.path.display(), path = %path.display(), "copy_resource");
    Ok(EditOutcome::Copied {
        from: existing.path.clone(),
        path,
    })
}

/// Delete the example `name`. There is no undo.
pub fn delete(config: &KbConfig, name: &str) -> Result<PathBuf> {
    validate_name(name)?;

    let target = config.examples_root().join(name);
    if !target.is_file() {
        return Err(KbError::not_found("resource", name));
    }

    fs::remove_file(&target)?;
    info!(path = %target.display(), "delete_resource");
    Ok(target)
}

/// Copy a resource file, returning the number of bytes copied
pub fn copy(from: &Path, to: &Path) -> Result<u64> {
    fs::copy(from, to).map_err(|e| KbError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        reason: e.to_string(),
    })
}
