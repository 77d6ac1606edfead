//! Builder for test notes with sensible defaults.

use chrono::{DateTime, TimeZone, Utc};
use jot::domain::{Note, NoteId};

/// Builder for creating test notes with sensible defaults.
///
/// Automatically generates an ID and uses a fixed creation time, with a
/// fluent API for the body and checklist.
#[derive(Debug, Clone)]
pub struct TestNote {
    id: NoteId,
    title: String,
    created: DateTime<Utc>,
    lines: Vec<String>,
    todo: Vec<String>,
    done: Vec<String>,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NoteId::generate(),
            title: title.into(),
            created: Utc
                .with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
            lines: Vec::new(),
            todo: Vec::new(),
            done: Vec::new(),
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into().parse().expect("Invalid NoteId");
        self
    }

    /// Adds a body line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Adds an open checklist item.
    pub fn todo(mut self, item: impl Into<String>) -> Self {
        self.todo.push(item.into());
        self
    }

    /// Adds a completed checklist item.
    pub fn done(mut self, item: impl Into<String>) -> Self {
        self.done.push(item.into());
        self
    }

    /// Returns the note ID as a string.
    pub fn id_str(&self) -> String {
        self.id.to_string()
    }

    /// Converts this test note into a domain Note.
    pub fn to_note(&self) -> Note {
        Note::builder(self.id.clone(), self.title.clone(), self.created)
            .lines(self.lines.clone())
            .todo(self.todo.clone())
            .done(self.done.clone())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("Minimal").to_note();
        assert_eq!(note.title(), "Minimal");
        assert!(note.lines().is_empty());
        assert!(note.todo().is_empty());
        assert!(note.done().is_empty());
    }

    #[test]
    fn test_note_generates_distinct_ids() {
        let a = TestNote::new("A");
        let b = TestNote::new("B");
        assert_ne!(a.id_str(), b.id_str());
    }

    #[test]
    fn test_note_builder_fields() {
        let note = TestNote::new("Groceries")
            .id("fixed-id")
            .line("weekly run")
            .todo("milk")
            .done("bread")
            .to_note();

        assert_eq!(note.id().as_str(), "fixed-id");
        assert_eq!(note.lines(), ["weekly run"]);
        assert_eq!(note.todo(), ["milk"]);
        assert_eq!(note.done(), ["bread"]);
    }
}
