//! External editor integration
//!
//! Creating and editing resources hands a path to an [`Editor`]. The default
//! [`CommandEditor`] spawns the user's editor and waits for it to exit.

use std::env;
use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::bail_usage;
use crate::error::{KbError, Result};

/// Environment variables consulted for the editor, in order
pub const EDITOR_VARS: &[&str] = &["KB_EDITOR", "EDITOR", "VISUAL"];

/// Opens a file for the user to edit
pub trait Editor {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Runs an editor command with the target path as its last argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEditor {
    program: String,
    args: Vec<String>,
}

impl CommandEditor {
    /// Parse an editor command line such as `subl -n` or `code --wait`
    pub fn new(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(String::from);
        let Some(program) = parts.next() else {
            bail_usage!("editor command is empty");
        };
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Use `editor_override` if given, else the first non-empty editor variable
    pub fn resolve(editor_override: Option<&str>) -> Result<Self> {
        let command = editor_override
            .map(String::from)
            .or_else(|| {
                EDITOR_VARS
                    .iter()
                    .filter_map(|var| env::var(var).ok())
                    .find(|v| !v.trim().is_empty())
            })
            .ok_or_else(|| {
                KbError::UsageError(
                    "no editor configured. Set KB_EDITOR, EDITOR or VISUAL, or use --editor"
                        .to_string(),
                )
            })?;
        Self::new(&command)
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Editor for CommandEditor {
    fn open(&self, path: &Path) -> Result<()> {
        debug!(editor = %self.program, path = %path.display(), "open_editor");

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|e| {
                KbError::Other(format!("failed to open editor '{}': {}", self.program, e))
            })?;

        // The editor's verdict is its own business
        if !status.success() {
            warn!(editor = %self.program, ?status, "editor exited with non-zero status");
        }
        Ok(())
    }
}
