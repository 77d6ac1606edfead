//! Core types: Note, NoteId, NoteCollection

mod collection;
mod note;
mod note_id;

pub use collection::NoteCollection;
pub use note::{Note, NoteBuilder};
pub use note_id::{NoteId, ParseNoteIdError};
