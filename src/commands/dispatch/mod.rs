//! Command dispatch logic for kb

use std::time::Instant;

use crate::cli::Cli;
use kb_core::error::Result;

mod command;
mod handlers;
mod macros;

pub(crate) use macros::trace_command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
