//! Note struct: a titled block of text lines plus two checklists.

use crate::domain::NoteId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single captured note.
///
/// The title is the first line of the note's text form and is never part of
/// `lines`. Checklist items are addressed by zero-based position within their
/// list; positions shift when an earlier item is removed.
///
/// On disk every note carries exactly the keys `id`, `title`, `time` (integer
/// epoch seconds), `lines`, `to-do` and `done`.
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, NoteId};
/// use chrono::Utc;
///
/// let note = Note::builder(NoteId::generate(), "Groceries", Utc::now())
///     .todo(vec!["eggs".to_string()])
///     .build();
/// assert_eq!(note.title(), "Groceries");
/// assert_eq!(note.todo(), ["eggs"]);
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    title: String,
    #[serde(rename = "time", with = "chrono::serde::ts_seconds")]
    created: DateTime<Utc>,
    #[serde(default, deserialize_with = "nullable_vec")]
    lines: Vec<String>,
    #[serde(rename = "to-do", default, deserialize_with = "nullable_vec")]
    todo: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    done: Vec<String>,
}

impl Note {
    /// Creates a builder for a note with the given identity.
    pub fn builder(id: NoteId, title: impl Into<String>, created: DateTime<Utc>) -> NoteBuilder {
        NoteBuilder::new(id, title, created)
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title (possibly empty).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns when the note was created, truncated to whole seconds.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the free-form body lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the open checklist items.
    pub fn todo(&self) -> &[String] {
        &self.todo
    }

    /// Returns the completed checklist items.
    pub fn done(&self) -> &[String] {
        &self.done
    }

    /// Moves `todo[n]` to the end of `done`, returning the item.
    ///
    /// Returns `None` and leaves the note untouched when `n` is out of range.
    pub fn check_item(&mut self, n: usize) -> Option<String> {
        if n >= self.todo.len() {
            return None;
        }
        let item = self.todo.remove(n);
        self.done.push(item.clone());
        Some(item)
    }

    /// Moves `done[n]` back to the end of `todo`, returning the item.
    pub fn uncheck_item(&mut self, n: usize) -> Option<String> {
        if n >= self.done.len() {
            return None;
        }
        let item = self.done.remove(n);
        self.todo.push(item.clone());
        Some(item)
    }

    /// Appends a new open item.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.todo.push(item.into());
    }

    /// Removes `todo[n]` without moving it to `done`.
    pub fn remove_item(&mut self, n: usize) -> Option<String> {
        if n >= self.todo.len() {
            return None;
        }
        Some(self.todo.remove(n))
    }

    /// Replaces the text of `todo[n]` in place. `done` is never touched.
    pub fn amend_item(&mut self, n: usize, text: impl Into<String>) -> bool {
        match self.todo.get_mut(n) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("created", &self.created)
            .field("lines", &self.lines)
            .field("todo", &self.todo)
            .field("done", &self.done)
            .finish()
    }
}

/// Builder for constructing a Note with body and checklist content.
pub struct NoteBuilder {
    id: NoteId,
    title: String,
    created: DateTime<Utc>,
    lines: Vec<String>,
    todo: Vec<String>,
    done: Vec<String>,
}

impl NoteBuilder {
    fn new(id: NoteId, title: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            created,
            lines: Vec::new(),
            todo: Vec::new(),
            done: Vec::new(),
        }
    }

    /// Sets the body lines.
    pub fn lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    /// Sets the open checklist items.
    pub fn todo(mut self, todo: Vec<String>) -> Self {
        self.todo = todo;
        self
    }

    /// Sets the completed checklist items.
    pub fn done(mut self, done: Vec<String>) -> Self {
        self.done = done;
        self
    }

    /// Builds the Note.
    ///
    /// The creation time is truncated to whole seconds, matching what the
    /// notes file can represent.
    pub fn build(self) -> Note {
        let created = DateTime::from_timestamp(self.created.timestamp(), 0).unwrap_or(self.created);
        Note {
            id: self.id,
            title: self.title,
            created,
            lines: self.lines,
            todo: self.todo,
            done: self.done,
        }
    }
}

/// Older notes files store empty lists as `null`.
fn nullable_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
