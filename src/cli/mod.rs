//! CLI argument parsing for kb
//!
//! Global flags: --kb-path, --ex-path, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};

pub use args::{
    CopyArgs, CreateArgs, DeleteArgs, DirsArgs, EditArgs, FetchArgs, ListArgs, SearchArgs,
    ShowArgs,
};
pub use kb_core::format::OutputFormat;
use parse::parse_format;

/// kb - a command-line knowledge base of notes and examples
#[derive(Parser, Debug)]
#[command(name = "kb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Knowledge root holding notes
    #[arg(long, global = true, env = "KB_PATH", hide_env_values = true)]
    pub kb_path: Option<String>,

    /// Examples root holding quick-reference snippets
    #[arg(long, global = true, env = "KB_EX_PATH", hide_env_values = true)]
    pub ex_path: Option<String>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overridden by RUST_LOG and KB_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List resources
    List(ListArgs),

    /// Search resources for a literal term
    Search(SearchArgs),

    /// Print a resource
    Show(ShowArgs),

    /// Create a new example in the editor
    Create(CreateArgs),

    /// Edit an example, or a note by its full path
    Edit(EditArgs),

    /// Delete an example
    Delete(DeleteArgs),

    /// Copy a file
    Copy(CopyArgs),

    /// List the knowledge directories
    Dirs(DirsArgs),

    /// Download community cheat sheets into the examples directory
    Fetch(FetchArgs),
}
