use anyhow::{Context, Error, Result, anyhow};

use super::print_note;
use super::resolve::NoteRef;
use crate::cli::display::Renderer;
use crate::cli::{AddArgs, AmendArgs, ItemIndexArgs};
use crate::store::{NoteStore, Storage};

pub fn handle_check<S: Storage>(
    args: &ItemIndexArgs,
    store: &mut NoteStore<S>,
    renderer: &Renderer,
) -> Result<()> {
    let target = NoteRef::from_arg(&args.note, args.by_title)?;
    let checked = match &target {
        NoteRef::Id(id) => store.check_item(id, args.index)?,
        NoteRef::Title(title) => store.check_item_by_title(title, args.index)?,
    };
    let Some(item) = checked else {
        return Err(missing_item(store, &target, args.index));
    };

    println!("Checked item: '{}' from note with {}", item, target);
    print_note(store, &target, renderer);
    Ok(())
}

pub fn handle_uncheck<S: Storage>(
    args: &ItemIndexArgs,
    store: &mut NoteStore<S>,
    renderer: &Renderer,
) -> Result<()> {
    let target = NoteRef::from_arg(&args.note, args.by_title)?;
    let unchecked = match &target {
        NoteRef::Id(id) => store.uncheck_item(id, args.index)?,
        NoteRef::Title(title) => store.uncheck_item_by_title(title, args.index)?,
    };
    let Some(item) = unchecked else {
        return Err(missing_item(store, &target, args.index));
    };

    println!("Unchecked item: '{}' from note with {}", item, target);
    print_note(store, &target, renderer);
    Ok(())
}

pub fn handle_add<S: Storage>(
    args: &AddArgs,
    store: &mut NoteStore<S>,
    renderer: &Renderer,
) -> Result<()> {
    let target = NoteRef::from_arg(&args.note, args.by_title)?;
    let added = match &target {
        NoteRef::Id(id) => store.add_item(id, &args.item),
        NoteRef::Title(title) => store.add_item_by_title(title, &args.item),
    }
    .with_context(|| format!("cannot add item to note with {}", target))?;
    if !added {
        return Err(target.not_found());
    }

    println!("Added item: '{}' to note with {}", args.item, target);
    print_note(store, &target, renderer);
    Ok(())
}

pub fn handle_scratch<S: Storage>(
    args: &ItemIndexArgs,
    store: &mut NoteStore<S>,
    renderer: &Renderer,
) -> Result<()> {
    let target = NoteRef::from_arg(&args.note, args.by_title)?;
    let removed = match &target {
        NoteRef::Id(id) => store.remove_item(id, args.index)?,
        NoteRef::Title(title) => store.remove_item_by_title(title, args.index)?,
    };
    let Some(item) = removed else {
        return Err(missing_item(store, &target, args.index));
    };

    println!("Removed item: '{}' from note with {}", item, target);
    print_note(store, &target, renderer);
    Ok(())
}

pub fn handle_amend<S: Storage>(
    args: &AmendArgs,
    store: &mut NoteStore<S>,
    renderer: &Renderer,
) -> Result<()> {
    let target = NoteRef::from_arg(&args.note, args.by_title)?;
    let amended = match &target {
        NoteRef::Id(id) => store.amend_item(id, args.index, &args.text),
        NoteRef::Title(title) => store.amend_item_by_title(title, args.index, &args.text),
    }
    .with_context(|| format!("cannot amend item {} of note with {}", args.index, target))?;
    if !amended {
        return Err(missing_item(store, &target, args.index));
    }

    println!("Amended item {} of note with {}", args.index, target);
    print_note(store, &target, renderer);
    Ok(())
}

/// Tells a missing note apart from an out-of-range item.
fn missing_item<S: Storage>(store: &NoteStore<S>, target: &NoteRef, n: usize) -> Error {
    if target.resolve(store).is_none() {
        target.not_found()
    } else {
        anyhow!("cannot find item number {} in note with {}", n, target)
    }
}
