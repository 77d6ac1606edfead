//! The ordered set of notes persisted as one unit.

use crate::domain::{Note, NoteId};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// All notes, in creation order.
///
/// Serialized as `{"notes": [...]}`. Lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteCollection {
    #[serde(default, deserialize_with = "nullable_notes")]
    notes: Vec<Note>,
}

impl NoteCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notes in creation order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the most recently created note.
    pub fn last(&self) -> Option<&Note> {
        self.notes.last()
    }

    /// Position of the first note with this id.
    pub fn position_by_id(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id() == id)
    }

    /// The first id that appears on more than one note.
    pub fn duplicate_id(&self) -> Option<&NoteId> {
        let mut seen = HashSet::new();
        self.notes.iter().map(Note::id).find(|id| !seen.insert(*id))
    }

    /// Position of the last note with exactly this title.
    ///
    /// Titles are not unique; the most recently created match wins.
    pub fn position_by_title(&self, title: &str) -> Option<usize> {
        self.notes.iter().rposition(|n| n.title() == title)
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.position_by_id(id).map(|i| &self.notes[i])
    }

    pub fn get_mut(&mut self, id: &NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id() == id)
    }

    /// Appends a note at the end (newest position).
    pub fn push(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Removes and returns the first note with this id.
    pub fn remove(&mut self, id: &NoteId) -> Option<Note> {
        self.position_by_id(id).map(|i| self.notes.remove(i))
    }

    /// Replaces the note with this id, keeping its position.
    pub fn replace(&mut self, id: &NoteId, note: Note) -> bool {
        match self.get_mut(id) {
            Some(slot) => {
                *slot = note;
                true
            }
            None => false,
        }
    }
}

fn nullable_notes<'de, D>(deserializer: D) -> Result<Vec<Note>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Note>>::deserialize(deserializer)?.unwrap_or_default())
}
