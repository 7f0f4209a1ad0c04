//! Archive extraction policies

use std::fs::{File, OpenOptions};
use std::io::{Cursor, Read, Write};
use std::path::Path;

use tracing::trace;
use zip::ZipArchive;

use super::{Layout, Source};
use crate::error::{KbError, Result};

/// Directories grouping pages by platform
const PLATFORM_DIRS: &[&str] = &["common/", "linux/", "osx/", "windows/"];

/// Merge the pages of `source` found in `archive` into `bundle_dir`.
///
/// Returns the number of pages appended.
pub fn extract(archive: &[u8], source: &Source, bundle_dir: &Path) -> Result<usize> {
    let mut zip = ZipArchive::new(Cursor::new(archive)).map_err(|e| KbError::fetch(source.url, e))?;
    let mut appended = 0;

    for i in 0..zip.len() {
        let mut file = zip.by_index(i).map_err(|e| KbError::fetch(source.url, e))?;
        if file.is_dir() {
            continue;
        }

        let Some(resource) = file.name().strip_prefix(source.prefix).map(String::from) else {
            continue;
        };

        let target = match source.layout {
            Layout::Platform => platform_target(&resource),
            Layout::Flat => flat_target(&resource),
        };
        let Some((target, annotation)) = target else {
            trace!(entry = %resource, "skip_entry");
            continue;
        };

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| KbError::fetch(source.url, format!("{resource}: {e}")))?;
        if content.is_empty() {
            continue;
        }

        let path = bundle_dir.join(&target);
        match source.layout {
            Layout::Platform => append_platform_page(&path, &content, &annotation)?,
            Layout::Flat => append_flat_page(&path, &target, &content)?,
        }
        appended += 1;
    }

    Ok(appended)
}

/// Target name and first-line annotation for a page under a platform directory
fn platform_target(resource: &str) -> Option<(String, String)> {
    if resource.is_empty() || resource.ends_with('/') || PLATFORM_DIRS.contains(&resource) {
        return None;
    }

    let (platform, rest) = resource.split_once('/')?;
    let base = rest.rsplit('/').next()?;
    let target = stem(base)?;

    let annotation = match platform {
        "common" => String::new(),
        "linux" => " (linux)".to_string(),
        "osx" => " (macos)".to_string(),
        "windows" => " (windows)".to_string(),
        other => format!(" ({other})"),
    };
    Some((target, annotation))
}

/// Target name for a top-level page: no extension or `.md`, alphanumeric start
fn flat_target(resource: &str) -> Option<(String, String)> {
    if resource.is_empty() || resource.contains('/') {
        return None;
    }
    if !resource.chars().next()?.is_alphanumeric() {
        return None;
    }

    match Path::new(resource).extension() {
        None => {}
        Some(ext) if ext == "md" => {}
        Some(_) => return None,
    }
    Some((stem(resource)?, String::new()))
}

fn stem(base: &str) -> Option<String> {
    let stem = Path::new(base).file_stem()?.to_string_lossy().into_owned();
    (!stem.is_empty()).then_some(stem)
}

fn open_append(path: &Path) -> Result<(File, bool)> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let has_content = file.metadata()?.len() > 0;
    Ok((file, has_content))
}

/// Append a platform page, separated from earlier content by one blank line,
/// with `annotation` added to its first line.
fn append_platform_page(path: &Path, content: &str, annotation: &str) -> Result<()> {
    let mut lines: Vec<String> = content.lines().map(String::from).collect();
    if let Some(first) = lines.first_mut() {
        first.push_str(annotation);
    }

    let (mut file, has_content) = open_append(path)?;
    if has_content {
        file.write_all(b"\n\n")?;
    }
    file.write_all(lines.join("\n").as_bytes())?;
    Ok(())
}

/// Append a flat page; an empty target first gets a `# name` heading unless
/// the page already starts with one.
fn append_flat_page(path: &Path, name: &str, content: &str) -> Result<()> {
    let heading = format!("# {name}");
    let first_line = content.lines().next().unwrap_or_default();

    let (mut file, has_content) = open_append(path)?;
    if has_content {
        file.write_all(b"\n\n")?;
    } else if !first_line.contains(&heading) {
        write!(file, "{heading}\n\n")?;
    }
    file.write_all(content.as_bytes())?;
    Ok(())
}
