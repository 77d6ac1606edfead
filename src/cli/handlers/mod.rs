//! Command handlers for the CLI.

mod delete;
mod edit;
mod init;
mod items;
mod list;
mod new;
mod resolve;


use anyhow::Result;
use clap::CommandFactory;

use crate::cli::display::Renderer;
use crate::cli::{Cli, CompletionsArgs};
use crate::store::{NoteStore, Storage};

// Re-export public items
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use init::handle_init;
pub use items::{handle_add, handle_amend, handle_check, handle_scratch, handle_uncheck};
pub use list::{handle_list, handle_search};
pub use new::handle_new;
pub use resolve::NoteRef;

// Re-export for tests
#[cfg(test)]
pub(crate) use edit::handle_edit_impl;
#[cfg(test)]
pub(crate) use new::{handle_new_impl, note_text};

// ===========================================
// Shared Utilities
// ===========================================

/// Prints the note a command just touched.
pub(crate) fn print_note<S: Storage>(store: &NoteStore<S>, target: &NoteRef, renderer: &Renderer) {
    if let Some(note) = target.find(store) {
        print!("{}", renderer.render_note(note, false));
    }
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "jot", &mut std::io::stdout());
    Ok(())
}
