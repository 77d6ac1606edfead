use anyhow::Result;

use super::resolve::NoteRef;
use crate::cli::DeleteArgs;
use crate::store::{NoteStore, Storage};

pub fn handle_delete<S: Storage>(args: &DeleteArgs, store: &mut NoteStore<S>) -> Result<()> {
    let target = NoteRef::from_arg(&args.note, args.by_title)?;

    match &target {
        NoteRef::Id(id) => match store.delete_by_id(id)? {
            Some(title) => println!("Note deleted with title: {}", title),
            None => return Err(target.not_found()),
        },
        NoteRef::Title(title) => match store.delete_by_title(title)? {
            Some(id) => println!("Note deleted with id: {}", id),
            None => return Err(target.not_found()),
        },
    }

    Ok(())
}
