//! File-backed CRUD over the full note collection.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Note, NoteCollection, NoteId};
use crate::infra::{Clock, IdGenerator, ParseError, SystemClock, UlidGenerator, parse, serialize};
use crate::store::{Storage, StorageError};

/// Errors that end the current invocation.
///
/// A missing note or an out-of-range item is not an error: those come back as
/// `None`/`false` so the caller can decide what to tell the user.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("notes file not found: {location}")]
    NotFound { location: String },

    #[error("notes file is corrupt: {location}: {source}")]
    Corrupt {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("notes file has more than one note with id '{id}': {location}")]
    DuplicateId { location: String, id: NoteId },

    #[error("notes file already exists: {location}")]
    AlreadyExists { location: String },

    #[error("cannot create a note from empty text")]
    EmptyInput(#[from] ParseError),

    #[error("checklist item must be a single line")]
    MultilineItem,

    #[error("failed to encode notes: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The note collection for one invocation, bound to its storage.
///
/// Loaded once; each successful mutation writes the complete collection back
/// before returning. Failed lookups and out-of-range positions never write.
pub struct NoteStore<S, C = SystemClock, G = UlidGenerator> {
    notes: NoteCollection,
    storage: S,
    clock: C,
    ids: G,
}

impl<S: Storage> NoteStore<S> {
    /// Loads the collection using the system clock and ULID ids.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if nothing is stored yet and
    /// `StoreError::Corrupt` if the stored bytes do not decode.
    /// `StoreError::DuplicateId` if two notes share an id.
    pub fn load(storage: S) -> Result<Self, StoreError> {
        Self::load_with(storage, SystemClock, UlidGenerator)
    }

    /// Persists an empty collection and returns a store over it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if the location already holds data
    /// and `force` is false.
    pub fn initialize(storage: S, force: bool) -> Result<Self, StoreError> {
        Self::initialize_with(storage, SystemClock, UlidGenerator, force)
    }
}

impl<S: Storage, C: Clock, G: IdGenerator> NoteStore<S, C, G> {
    /// Loads the collection with explicit time and id sources.
    pub fn load_with(storage: S, clock: C, ids: G) -> Result<Self, StoreError> {
        let location = storage.location();
        let bytes = storage.read_all().map_err(|e| match e {
            StorageError::NotFound { location } => StoreError::NotFound { location },
            other => StoreError::Storage(other),
        })?;

        let notes: NoteCollection =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                location: location.clone(),
                source,
            })?;

        if let Some(id) = notes.duplicate_id() {
            return Err(StoreError::DuplicateId {
                location,
                id: id.clone(),
            });
        }

        debug!(location = %location, notes = notes.len(), "loaded notes");

        Ok(Self {
            notes,
            storage,
            clock,
            ids,
        })
    }

    /// Like [`NoteStore::initialize`] with explicit time and id sources.
    pub fn initialize_with(storage: S, clock: C, ids: G, force: bool) -> Result<Self, StoreError> {
        if storage.exists() && !force {
            return Err(StoreError::AlreadyExists {
                location: storage.location(),
            });
        }

        let mut store = Self {
            notes: NoteCollection::new(),
            storage,
            clock,
            ids,
        };
        store.commit(NoteCollection::new())?;
        info!(location = %store.storage.location(), "initialized notes file");
        Ok(store)
    }

    // ===========================================
    // Queries
    // ===========================================

    /// The whole collection, in creation order.
    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    /// The most recently created note.
    pub fn last(&self) -> Option<&Note> {
        self.notes.last()
    }

    pub fn find_by_id(&self, id: &NoteId) -> Option<&Note> {
        self.notes.get(id)
    }

    /// Resolves a title to an id. When several notes share the title, the
    /// last one in collection order (the newest) wins.
    pub fn find_id_by_title(&self, title: &str) -> Option<NoteId> {
        self.notes
            .position_by_title(title)
            .map(|i| self.notes.notes()[i].id().clone())
    }

    /// Text form of a note, for seeding an editor.
    pub fn note_text(&self, id: &NoteId) -> Option<String> {
        self.find_by_id(id).map(serialize)
    }

    pub fn note_text_by_title(&self, title: &str) -> Option<String> {
        let id = self.find_id_by_title(title)?;
        self.note_text(&id)
    }

    /// Notes whose title contains any of the whitespace-separated keywords,
    /// ignoring case. An empty query matches every note.
    pub fn search_titles(&self, query: &str) -> Vec<&Note> {
        let keywords: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        self.notes
            .notes()
            .iter()
            .filter(|note| {
                let title = note.title().to_lowercase();
                keywords.is_empty() || keywords.iter().any(|k| title.contains(k.as_str()))
            })
            .collect()
    }

    // ===========================================
    // Whole-note operations
    // ===========================================

    /// Parses `text` into a new note, appends it and persists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyInput` if `text` has no lines.
    pub fn create(&mut self, text: &str) -> Result<NoteId, StoreError> {
        let note = parse(text)?.into_note(self.ids.next_id(), self.clock.now());
        let id = note.id().clone();

        let mut next = self.notes.clone();
        next.push(note);
        self.commit(next)?;

        info!(id = %id, "created note");
        Ok(id)
    }

    /// Deletes the note with this id, returning its title.
    pub fn delete_by_id(&mut self, id: &NoteId) -> Result<Option<String>, StoreError> {
        let mut next = self.notes.clone();
        let Some(removed) = next.remove(id) else {
            debug!(id = %id, "delete: no such note");
            return Ok(None);
        };
        self.commit(next)?;

        info!(id = %id, "deleted note");
        Ok(Some(removed.title().to_string()))
    }

    /// Deletes the note the title resolves to, returning its id.
    pub fn delete_by_title(&mut self, title: &str) -> Result<Option<NoteId>, StoreError> {
        let Some(id) = self.find_id_by_title(title) else {
            return Ok(None);
        };
        Ok(self.delete_by_id(&id)?.map(|_| id))
    }

    /// Replaces a note's content with `text`, keeping its id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyInput` if `text` has no lines.
    pub fn replace_note(&mut self, id: &NoteId, text: &str) -> Result<bool, StoreError> {
        let parsed = parse(text)?;
        let replaced = self.update_note(id, |note| {
            *note = parsed.into_note(note.id().clone(), note.created());
            Some(())
        })?;
        Ok(replaced.is_some())
    }

    pub fn replace_note_by_title(&mut self, title: &str, text: &str) -> Result<bool, StoreError> {
        match self.find_id_by_title(title) {
            Some(id) => self.replace_note(&id, text),
            None => Ok(false),
        }
    }

    // ===========================================
    // Checklist operations
    // ===========================================

    /// Moves open item `n` to the end of the done list.
    pub fn check_item(&mut self, id: &NoteId, n: usize) -> Result<Option<String>, StoreError> {
        self.update_note(id, |note| note.check_item(n))
    }

    /// Moves done item `n` back to the end of the open list.
    pub fn uncheck_item(&mut self, id: &NoteId, n: usize) -> Result<Option<String>, StoreError> {
        self.update_note(id, |note| note.uncheck_item(n))
    }

    /// Appends an open item. Returns `false` when the note is missing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MultilineItem` if `item` contains a line break.
    pub fn add_item(&mut self, id: &NoteId, item: &str) -> Result<bool, StoreError> {
        single_line(item)?;
        let added = self.update_note(id, |note| {
            note.add_item(item);
            Some(())
        })?;
        Ok(added.is_some())
    }

    /// Drops open item `n` entirely.
    pub fn remove_item(&mut self, id: &NoteId, n: usize) -> Result<Option<String>, StoreError> {
        self.update_note(id, |note| note.remove_item(n))
    }

    /// Rewrites the text of open item `n`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MultilineItem` if `text` contains a line break.
    pub fn amend_item(&mut self, id: &NoteId, n: usize, text: &str) -> Result<bool, StoreError> {
        single_line(text)?;
        let amended = self.update_note(id, |note| note.amend_item(n, text).then_some(()))?;
        Ok(amended.is_some())
    }

    pub fn check_item_by_title(
        &mut self,
        title: &str,
        n: usize,
    ) -> Result<Option<String>, StoreError> {
        match self.find_id_by_title(title) {
            Some(id) => self.check_item(&id, n),
            None => Ok(None),
        }
    }

    pub fn uncheck_item_by_title(
        &mut self,
        title: &str,
        n: usize,
    ) -> Result<Option<String>, StoreError> {
        match self.find_id_by_title(title) {
            Some(id) => self.uncheck_item(&id, n),
            None => Ok(None),
        }
    }

    pub fn add_item_by_title(&mut self, title: &str, item: &str) -> Result<bool, StoreError> {
        match self.find_id_by_title(title) {
            Some(id) => self.add_item(&id, item),
            None => Ok(false),
        }
    }

    pub fn remove_item_by_title(
        &mut self,
        title: &str,
        n: usize,
    ) -> Result<Option<String>, StoreError> {
        match self.find_id_by_title(title) {
            Some(id) => self.remove_item(&id, n),
            None => Ok(None),
        }
    }

    pub fn amend_item_by_title(
        &mut self,
        title: &str,
        n: usize,
        text: &str,
    ) -> Result<bool, StoreError> {
        match self.find_id_by_title(title) {
            Some(id) => self.amend_item(&id, n, text),
            None => Ok(false),
        }
    }

    // ===========================================
    // Persistence
    // ===========================================

    /// Applies `change` to a copy of the note and commits it if the change
    /// reports success. Nothing is written otherwise.
    fn update_note<T>(
        &mut self,
        id: &NoteId,
        change: impl FnOnce(&mut Note) -> Option<T>,
    ) -> Result<Option<T>, StoreError> {
        let Some(mut note) = self.notes.get(id).cloned() else {
            debug!(id = %id, "no such note");
            return Ok(None);
        };
        let Some(outcome) = change(&mut note) else {
            debug!(id = %id, "change rejected, nothing written");
            return Ok(None);
        };

        let mut next = self.notes.clone();
        next.replace(id, note);
        self.commit(next)?;

        info!(id = %id, "updated note");
        Ok(Some(outcome))
    }

    /// Writes `next` in full, then makes it the loaded collection.
    fn commit(&mut self, next: NoteCollection) -> Result<(), StoreError> {
        let bytes = encode(&next)?;
        self.storage.write_all(&bytes)?;
        debug!(
            location = %self.storage.location(),
            notes = next.len(),
            bytes = bytes.len(),
            "persisted notes"
        );
        self.notes = next;
        Ok(())
    }
}

/// Items are one line each in the text form, so a line break would split one
/// item into several on the next edit.
fn single_line(item: &str) -> Result<(), StoreError> {
    if item.contains(['\n', '\r']) {
        return Err(StoreError::MultilineItem);
    }
    Ok(())
}

/// Pretty JSON with four-space indentation.
fn encode(notes: &NoteCollection) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    notes
        .serialize(&mut serializer)
        .map_err(StoreError::Encode)?;
    Ok(buf)
}
