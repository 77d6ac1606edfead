use anyhow::Result;

use super::resolve::NoteRef;
use crate::cli::display::Renderer;
use crate::cli::output::{OutputFormat, notes_json};
use crate::cli::{ListArgs, SearchArgs};
use crate::domain::Note;
use crate::store::{NoteStore, Storage};

pub fn handle_list<S: Storage>(
    args: &ListArgs,
    store: &NoteStore<S>,
    renderer: &Renderer,
) -> Result<()> {
    let notes: Vec<&Note> = if args.all {
        store.notes().notes().iter().collect()
    } else if let Some(note) = &args.note {
        let target = NoteRef::from_arg(note, args.by_title)?;
        let found = target.find(store).ok_or_else(|| target.not_found())?;
        vec![found]
    } else {
        store.last().into_iter().collect()
    };

    if notes.is_empty() && args.format == OutputFormat::Human {
        println!("No notes yet. Create one with `jot new`.");
        return Ok(());
    }

    print_notes(&notes, args.format, args.headers, renderer)
}

pub fn handle_search<S: Storage>(
    args: &SearchArgs,
    store: &NoteStore<S>,
    renderer: &Renderer,
) -> Result<()> {
    let query = args.keywords.join(" ");
    let notes = store.search_titles(&query);

    if notes.is_empty() && args.format == OutputFormat::Human {
        println!("No notes match '{}'", query);
        return Ok(());
    }

    print_notes(&notes, args.format, args.headers, renderer)
}

fn print_notes(
    notes: &[&Note],
    format: OutputFormat,
    headers: bool,
    renderer: &Renderer,
) -> Result<()> {
    match format {
        OutputFormat::Human => print!("{}", renderer.render_notes(notes.iter().copied(), headers)),
        OutputFormat::Json => println!("{}", notes_json(notes)?),
    }
    Ok(())
}
