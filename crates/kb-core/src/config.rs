//! Configuration for kb
//!
//! Configuration comes from the environment (`KB_EX_PATH`, `KB_PATH`,
//! `KB_COLORS`). It is read once into a [`RawConfig`], validated into a
//! [`KbConfig`] and then passed explicitly to every operation.

use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use tracing::debug;

use crate::bail_config;
use crate::error::{KbError, Result};

/// Environment variable naming the examples root
pub const EX_PATH_VAR: &str = "KB_EX_PATH";

/// Environment variable naming the knowledge root
pub const KB_PATH_VAR: &str = "KB_PATH";

/// Environment variable enabling styled output
pub const COLORS_VAR: &str = "KB_COLORS";

/// Reserved subdirectory of the examples root holding fetched content
pub const WEB_DIR: &str = ".web";

/// Unvalidated configuration values as they were provided
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub examples_root: Option<String>,
    pub knowledge_root: Option<String>,
    pub colors: Option<String>,
}

impl RawConfig {
    /// Read configuration values from the process environment
    pub fn from_env() -> Self {
        Self {
            examples_root: env::var(EX_PATH_VAR).ok(),
            knowledge_root: env::var(KB_PATH_VAR).ok(),
            colors: env::var(COLORS_VAR).ok(),
        }
    }

    /// Validate and normalize both roots.
    ///
    /// Fails fast: the examples root is never created here.
    pub fn resolve(&self) -> Result<KbConfig> {
        let examples_root = resolve_dir(EX_PATH_VAR, self.examples_root.as_deref())?;
        check_readable(EX_PATH_VAR, &examples_root)?;
        check_writable(EX_PATH_VAR, &examples_root)?;

        let knowledge_root = resolve_dir(KB_PATH_VAR, self.knowledge_root.as_deref())?;

        let colors = self
            .colors
            .as_deref()
            .is_some_and(|v| !v.eq_ignore_ascii_case("false"));

        debug!(
            examples_root = %examples_root.display(),
            knowledge_root = %knowledge_root.display(),
            colors,
            "resolve_config"
        );

        Ok(KbConfig {
            examples_root,
            knowledge_root,
            colors,
        })
    }
}

/// Validated configuration shared by all kb operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KbConfig {
    examples_root: PathBuf,
    knowledge_root: PathBuf,
    colors: bool,
}

impl KbConfig {
    pub fn examples_root(&self) -> &Path {
        &self.examples_root
    }

    pub fn knowledge_root(&self) -> &Path {
        &self.knowledge_root
    }

    /// Directory of the fetched-content bundle
    pub fn web_dir(&self) -> PathBuf {
        self.examples_root.join(WEB_DIR)
    }

    /// Whether displayed content should be styled
    pub fn colors(&self) -> bool {
        self.colors
    }
}

fn resolve_dir(var: &str, raw: Option<&str>) -> Result<PathBuf> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        bail_config!("Please set the environment variable {var}.");
    };

    let path = expand_path(raw)?;
    if !path.is_dir() {
        bail_config!(
            "Please set the environment variable {var} to an existing directory (got {}).",
            path.display()
        );
    }
    Ok(path)
}

fn check_readable(var: &str, path: &Path) -> Result<()> {
    fs::read_dir(path).map_err(|e| {
        KbError::configuration(format!(
            "The {var} ({}) is not readable: {e}",
            path.display()
        ))
    })?;
    Ok(())
}

fn check_writable(var: &str, path: &Path) -> Result<()> {
    // The probe file is unlinked as soon as it is dropped
    tempfile::tempfile_in(path).map_err(|e| {
        KbError::configuration(format!(
            "The {var} ({}) is not writable: {e}",
            path.display()
        ))
    })?;
    Ok(())
}

/// Expand `~` and environment variables, make the path absolute, fold `.`
/// and `..` components and strip a single trailing separator. Symlinks are
/// left alone.
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = expand_vars(raw, |name| env::var(name).ok());
    let expanded = expand_home(&expanded)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        env::current_dir()?.join(expanded)
    };

    Ok(strip_trailing_separator(normalize_lexically(&absolute)))
}

/// Fold `.` and `..` without touching the filesystem; `..` above the root
/// stays at the root
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(out.components().next_back(), Some(Component::RootDir) | None) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Whether `path` is `root` or lies below it, once symlinks are resolved.
///
/// Falls back to a lexical comparison when either path cannot be resolved.
pub fn is_within(path: &Path, root: &Path) -> bool {
    match (fs::canonicalize(path), fs::canonicalize(root)) {
        (Ok(path), Ok(root)) => path.starts_with(root),
        _ => path.starts_with(root),
    }
}

fn expand_home(raw: &str) -> Result<PathBuf> {
    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/") {
        rest
    } else {
        return Ok(PathBuf::from(raw));
    };

    let home = dirs::home_dir()
        .ok_or_else(|| KbError::configuration("could not determine the home directory"))?;
    Ok(if rest.is_empty() { home } else { home.join(rest) })
}

fn strip_trailing_separator(path: PathBuf) -> PathBuf {
    let text = path.to_string_lossy();
    match text.strip_suffix(MAIN_SEPARATOR) {
        Some(stripped) if !stripped.is_empty() => PathBuf::from(stripped),
        _ => path,
    }
}

/// Replace `$NAME` and `${NAME}` references using `lookup`.
///
/// References that do not resolve are kept verbatim.
pub fn expand_vars(raw: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        if name.is_empty() {
            out.push('$');
            rest = after;
            continue;
        }

        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[pos..=pos + consumed]),
        }
        rest = &after[consumed..];
    }

    out.push_str(rest);
    out
}
