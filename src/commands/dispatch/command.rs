//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use kb_core::config::{KbConfig, RawConfig};
use kb_core::error::Result;

use super::trace_command;

/// Resolve configuration, letting `--kb-path` / `--ex-path` override the
/// environment
pub fn resolve_config(cli: &Cli) -> Result<KbConfig> {
    let raw = RawConfig {
        examples_root: cli.ex_path.clone(),
        knowledge_root: cli.kb_path.clone(),
        ..RawConfig::from_env()
    };
    raw.resolve()
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn config(&self) -> Result<KbConfig> {
        let config = resolve_config(self.cli)?;
        trace_command!(self.cli, self.start, "resolve_config");
        Ok(config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("kb {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A command-line knowledge base of notes and examples.");
        println!();
        println!("Run `kb --help` for usage information.");
        Ok(())
    }
}
