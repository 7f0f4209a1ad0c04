use clap::Args;

use super::parse::parse_scope;
use kb_core::resource::Scope;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Which resources to list (examples, notes, all)
    #[arg(long, short, default_value = "examples", value_parser = parse_scope)]
    pub scope: Scope,

    /// Include fetched cheat sheets
    #[arg(long, short)]
    pub web: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Literal, case-sensitive text to look for
    pub term: String,

    /// Which resources to search (examples, notes, all)
    #[arg(long, short, default_value = "examples", value_parser = parse_scope)]
    pub scope: Scope,

    /// Include fetched cheat sheets
    #[arg(long, short)]
    pub web: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Resource name, or the full path of a note
    pub name: String,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Name of the new example
    pub name: String,

    /// Editor command (defaults to $KB_EDITOR, $EDITOR, then $VISUAL)
    #[arg(long)]
    pub editor: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Example name, or the full path of a note
    pub name: String,

    /// Create the example when missing; copy notes and fetched pages into
    /// the examples directory before editing
    #[arg(long, short)]
    pub create: bool,

    /// Editor command (defaults to $KB_EDITOR, $EDITOR, then $VISUAL)
    #[arg(long)]
    pub editor: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Name of the example to delete
    pub name: String,
}

#[derive(Args, Debug, Clone)]
pub struct CopyArgs {
    /// File to copy
    pub src: String,

    /// Destination path
    pub dst: String,
}

#[derive(Args, Debug, Clone)]
pub struct DirsArgs {
    /// Mark the directories configured by KB_PATH and KB_EX_PATH
    #[arg(long, short)]
    pub annotate: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Remove previously fetched cheat sheets first
    #[arg(long)]
    pub clean: bool,
}
