use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Read};

use super::print_note;
use super::resolve::NoteRef;
use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::cli::display::Renderer;
use crate::cli::editor::{CommandEditor, EditorLauncher, compose};
use crate::store::{NoteStore, Storage};

pub fn handle_new<S: Storage>(
    args: &NewArgs,
    store: &mut NoteStore<S>,
    renderer: &Renderer,
    config: &Config,
) -> Result<()> {
    let stdin = io::stdin();
    if !args.editor && stdin.is_terminal() {
        match &args.title {
            Some(title) => eprintln!("{}: (finish with Ctrl-D)", title),
            None => eprintln!("New note, title on the first line: (finish with Ctrl-D)"),
        }
    }

    let editor = CommandEditor::new(config.editor());
    handle_new_impl(args, store, renderer, &editor, stdin.lock())
}

/// Internal implementation that accepts a generic editor and input.
pub(crate) fn handle_new_impl<S: Storage, E: EditorLauncher, R: Read>(
    args: &NewArgs,
    store: &mut NoteStore<S>,
    renderer: &Renderer,
    editor: &E,
    input: R,
) -> Result<()> {
    let text = note_text(args, editor, input)?;
    let id = store.create(&text)?;

    println!("New note created with id: {}", id);
    print_note(store, &NoteRef::Id(id), renderer);
    Ok(())
}

/// Gathers the text of a new note. A title given on the command line becomes
/// the first line, whether the rest comes from stdin or the editor.
pub(crate) fn note_text<E: EditorLauncher, R: Read>(
    args: &NewArgs,
    editor: &E,
    mut input: R,
) -> Result<String> {
    let seed = args
        .title
        .as_deref()
        .map(|title| format!("{}\n", title))
        .unwrap_or_default();

    if args.editor {
        return compose(editor, &seed);
    }

    let mut body = String::new();
    input
        .read_to_string(&mut body)
        .context("failed to read note from stdin")?;
    Ok(seed + &body)
}
