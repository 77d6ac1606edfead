use anyhow::{Result, bail};

use super::print_note;
use super::resolve::NoteRef;
use crate::cli::EditArgs;
use crate::cli::config::Config;
use crate::cli::display::Renderer;
use crate::cli::editor::{CommandEditor, EditorLauncher, compose};
use crate::store::{NoteStore, Storage, StoreError};

pub fn handle_edit<S: Storage>(
    args: &EditArgs,
    store: &mut NoteStore<S>,
    renderer: &Renderer,
    config: &Config,
) -> Result<()> {
    handle_edit_impl(args, store, renderer, &CommandEditor::new(config.editor()))
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_edit_impl<S: Storage, E: EditorLauncher>(
    args: &EditArgs,
    store: &mut NoteStore<S>,
    renderer: &Renderer,
    editor: &E,
) -> Result<()> {
    let target = NoteRef::from_arg(&args.note, args.by_title)?;
    // Pin the id first: editing may change the title.
    let Some(id) = target.resolve(store) else {
        return Err(target.not_found());
    };
    let Some(original) = store.note_text(&id) else {
        return Err(target.not_found());
    };

    let edited = compose(editor, &original)?;
    if edited == original {
        println!("Note unchanged");
        return Ok(());
    }

    match store.replace_note(&id, &edited) {
        Ok(true) => {}
        Ok(false) => return Err(target.not_found()),
        Err(StoreError::EmptyInput(_)) => {
            bail!("edited note is empty, keeping note with {}", target)
        }
        Err(err) => return Err(err.into()),
    }

    println!("Note changed:");
    print_note(store, &NoteRef::Id(id), renderer);
    Ok(())
}
