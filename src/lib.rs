//! jot - quick notes and checklists kept in a single JSON file

pub mod cli;
pub mod domain;
pub mod infra;
pub mod store;

use anyhow::{Result, bail};
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::{
    Cli, Command,
    config::Config,
    display::Renderer,
    handlers::{
        handle_add, handle_amend, handle_check, handle_completions, handle_delete, handle_edit,
        handle_init, handle_list, handle_new, handle_scratch, handle_search, handle_uncheck,
    },
};
use infra::FileStorage;
use store::{NoteStore, StoreError};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let storage = FileStorage::new(config.notes_file(cli.file.as_ref()));
    tracing::debug!(file = %storage.path().display(), "using notes file");

    let mut store = match &cli.command {
        Command::Init(args) => return handle_init(args, storage),
        Command::Completions(args) => return handle_completions(args),
        _ => match NoteStore::load(storage) {
            Ok(store) => store,
            Err(StoreError::NotFound { location }) => {
                bail!("no notes file at {} (run `jot init` to create one)", location)
            }
            Err(err) => return Err(err.into()),
        },
    };

    let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let renderer = Renderer::new(&config.style, color);

    match &cli.command {
        Command::List(args) => handle_list(args, &store, &renderer),
        Command::Search(args) => handle_search(args, &store, &renderer),
        Command::New(args) => handle_new(args, &mut store, &renderer, &config),
        Command::Delete(args) => handle_delete(args, &mut store),
        Command::Check(args) => handle_check(args, &mut store, &renderer),
        Command::Uncheck(args) => handle_uncheck(args, &mut store, &renderer),
        Command::Add(args) => handle_add(args, &mut store, &renderer),
        Command::Scratch(args) => handle_scratch(args, &mut store, &renderer),
        Command::Edit(args) => handle_edit(args, &mut store, &renderer, &config),
        Command::Amend(args) => handle_amend(args, &mut store, &renderer),
        Command::Init(_) | Command::Completions(_) => Ok(()),
    }
}

/// Logs go to stderr so note output on stdout stays clean. `RUST_LOG`
/// overrides the level picked by `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("jot={}", level)),
    );

    // A subscriber may already be installed when run() is called twice in-process.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
