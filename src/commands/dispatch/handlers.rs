//! Command implementations for all kb commands

use crate::cli::{
    Commands, CopyArgs, CreateArgs, DeleteArgs, DirsArgs, EditArgs, FetchArgs, ListArgs,
    SearchArgs, ShowArgs,
};
use crate::commands;
use kb_core::editor::CommandEditor;
use kb_core::error::Result;
use kb_core::fetch::{FetchOptions, HttpDownloader, SOURCES};
use kb_core::sniff::MimeSniffer;

use super::command::{Command, CommandContext};
use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::List(args) => execute_list(ctx, args),
            Commands::Search(args) => execute_search(ctx, args),
            Commands::Show(args) => execute_show(ctx, args),
            Commands::Create(args) => execute_create(ctx, args),
            Commands::Edit(args) => execute_edit(ctx, args),
            Commands::Delete(args) => execute_delete(ctx, args),
            Commands::Copy(args) => execute_copy(ctx, args),
            Commands::Dirs(args) => execute_dirs(ctx, args),
            Commands::Fetch(args) => execute_fetch(ctx, args),
        }
    }
}

fn execute_list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let config = ctx.config()?;
    commands::list::execute(ctx.cli, &config, args.scope, args.web)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_search(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let config = ctx.config()?;
    commands::search::execute(
        ctx.cli,
        &config,
        &MimeSniffer,
        &args.term,
        args.scope,
        args.web,
    )?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_show(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
    let config = ctx.config()?;
    commands::show::execute(ctx.cli, &config, &args.name)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_create(ctx: &CommandContext, args: &CreateArgs) -> Result<()> {
    let config = ctx.config()?;
    let editor = CommandEditor::resolve(args.editor.as_deref())?;
    commands::create::execute(ctx.cli, &config, &editor, &args.name)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_edit(ctx: &CommandContext, args: &EditArgs) -> Result<()> {
    let config = ctx.config()?;
    let editor = CommandEditor::resolve(args.editor.as_deref())?;
    commands::edit::execute(
        ctx.cli,
        &config,
        &editor,
        &MimeSniffer,
        &args.name,
        args.create,
    )?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_delete(ctx: &CommandContext, args: &DeleteArgs) -> Result<()> {
    let config = ctx.config()?;
    commands::delete::execute(ctx.cli, &config, &args.name)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_copy(ctx: &CommandContext, args: &CopyArgs) -> Result<()> {
    commands::copy::execute(ctx.cli, &args.src, &args.dst)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_dirs(ctx: &CommandContext, args: &DirsArgs) -> Result<()> {
    let config = ctx.config()?;
    commands::dirs::execute(ctx.cli, &config, args.annotate)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_fetch(ctx: &CommandContext, args: &FetchArgs) -> Result<()> {
    let config = ctx.config()?;
    let downloader = HttpDownloader::new();
    let options = FetchOptions { clean: args.clean };
    commands::fetch::execute(ctx.cli, &config, &downloader, SOURCES, options)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}
