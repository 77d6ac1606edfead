//! CLI command definitions and handlers

pub mod config;
pub mod display;
pub mod editor;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// jot - quick notes and checklists from the command line
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Notes file (overrides config file)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Config file (default: ~/.config/jot/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty notes file
    Init(InitArgs),

    /// Show the last note, one note, or all notes
    #[command(name = "ls")]
    List(ListArgs),

    /// Show notes whose title contains any of the keywords
    Search(SearchArgs),

    /// Create a new note from stdin or your editor
    New(NewArgs),

    /// Delete a note
    #[command(name = "rm", visible_alias = "del")]
    Delete(DeleteArgs),

    /// Check off a to-do item
    Check(ItemIndexArgs),

    /// Move a done item back to the to-do list
    Uncheck(ItemIndexArgs),

    /// Add a to-do item
    Add(AddArgs),

    /// Remove a to-do item without checking it
    Scratch(ItemIndexArgs),

    /// Edit a whole note in your editor
    Edit(EditArgs),

    /// Replace the text of a to-do item
    Amend(AmendArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Parses a list position, rejecting negatives with a readable message.
fn parse_index(s: &str) -> Result<usize, String> {
    s.parse::<usize>()
        .map_err(|_| format!("'{}' is not a non-negative integer", s))
}

/// Arguments for the `init` command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing notes file with an empty one
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Note ID (or title with -t); shows the last note when omitted
    pub note: Option<String>,

    /// Treat NOTE as a title
    #[arg(short = 't', long = "title", requires = "note")]
    pub by_title: bool,

    /// Show all notes
    #[arg(short, long, conflicts_with = "note")]
    pub all: bool,

    /// Show only title, date and ID
    #[arg(short = 'H', long)]
    pub headers: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Keywords to look for in note titles
    #[arg(required = true)]
    pub keywords: Vec<String>,

    /// Show only title, date and ID
    #[arg(short = 'H', long)]
    pub headers: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title (first line); the rest is read from stdin
    pub title: Option<String>,

    /// Write the note in your editor instead of stdin
    #[arg(short, long, visible_short_alias = 'p')]
    pub editor: bool,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note ID (or title with -t)
    pub note: String,

    /// Treat NOTE as a title
    #[arg(short = 't', long = "title")]
    pub by_title: bool,
}

/// Arguments for `check`, `uncheck` and `scratch`
#[derive(Parser, Debug)]
pub struct ItemIndexArgs {
    /// Note ID (or title with -t)
    pub note: String,

    /// Item number, starting at 0
    #[arg(value_parser = parse_index, allow_negative_numbers = true)]
    pub index: usize,

    /// Treat NOTE as a title
    #[arg(short = 't', long = "title")]
    pub by_title: bool,
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note ID (or title with -t)
    pub note: String,

    /// Text of the new to-do item
    #[arg(allow_hyphen_values = true)]
    pub item: String,

    /// Treat NOTE as a title
    #[arg(short = 't', long = "title")]
    pub by_title: bool,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID (or title with -t)
    pub note: String,

    /// Treat NOTE as a title
    #[arg(short = 't', long = "title")]
    pub by_title: bool,
}

/// Arguments for the `amend` command
#[derive(Parser, Debug)]
pub struct AmendArgs {
    /// Note ID (or title with -t)
    pub note: String,

    /// Item number, starting at 0
    #[arg(value_parser = parse_index, allow_negative_numbers = true)]
    pub index: usize,

    /// New text for the item
    #[arg(allow_hyphen_values = true)]
    pub text: String,

    /// Treat NOTE as a title
    #[arg(short = 't', long = "title")]
    pub by_title: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
