//! Plain-text note format used for capture and editing.

use crate::domain::{Note, NoteId};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Prefix marking an open checklist item.
pub const TODO_MARKER: &str = " - ";

/// Prefix marking a completed checklist item.
pub const DONE_MARKER: &str = " X ";

/// Content of a note parsed from text, before it has an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedText {
    pub title: String,
    pub lines: Vec<String>,
    pub todo: Vec<String>,
    pub done: Vec<String>,
}

impl ParsedText {
    /// Attaches an identity and creation time, producing a Note.
    pub fn into_note(self, id: NoteId, created: DateTime<Utc>) -> Note {
        Note::builder(id, self.title, created)
            .lines(self.lines)
            .todo(self.todo)
            .done(self.done)
            .build()
    }
}

/// Errors during text parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("note text is empty")]
    Empty,
}

/// Parses the text form of a note.
///
/// # Format
/// ```text
/// Groceries
/// Buy milk
///  - eggs
///  X bananas
/// ```
///
/// The first line is the title. Each later line starting with `" - "` is an
/// open item, `" X "` a completed item (checked in that order, prefix
/// stripped); anything else is a body line kept verbatim. Trailing `\r` is
/// stripped from every line and one trailing empty line left by a final
/// newline is dropped.
///
/// A body line that itself starts with a marker is read back as a checklist
/// item; the format has no escaping.
///
/// # Errors
///
/// Returns `ParseError::Empty` if the text has no lines.
pub fn parse(text: &str) -> Result<ParsedText, ParseError> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .collect();

    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut lines = lines.into_iter();
    let title = lines.next().ok_or(ParseError::Empty)?;

    let mut parsed = ParsedText {
        title: title.to_string(),
        lines: Vec::new(),
        todo: Vec::new(),
        done: Vec::new(),
    };

    for line in lines {
        if let Some(item) = line.strip_prefix(TODO_MARKER) {
            parsed.todo.push(item.to_string());
        } else if let Some(item) = line.strip_prefix(DONE_MARKER) {
            parsed.done.push(item.to_string());
        } else {
            parsed.lines.push(line.to_string());
        }
    }

    Ok(parsed)
}

/// Serializes a note to its text form, the inverse of [`parse`].
pub fn serialize(note: &Note) -> String {
    let mut text = String::new();
    text.push_str(note.title());
    text.push('\n');
    for line in note.lines() {
        text.push_str(line);
        text.push('\n');
    }
    for item in note.todo() {
        text.push_str(TODO_MARKER);
        text.push_str(item);
        text.push('\n');
    }
    for item in note.done() {
        text.push_str(DONE_MARKER);
        text.push_str(item);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_note_id() -> NoteId {
        "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap()
    }

    fn test_datetime() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ===========================================
    // Parsing
    // ===========================================

    #[test]
    fn parse_groceries_scenario() {
        let parsed = parse("Groceries\nBuy milk\n - eggs\n - bread\n X bananas\n").unwrap();
        assert_eq!(parsed.title, "Groceries");
        assert_eq!(parsed.lines, strings(&["Buy milk"]));
        assert_eq!(parsed.todo, strings(&["eggs", "bread"]));
        assert_eq!(parsed.done, strings(&["bananas"]));
    }

    #[test]
    fn parse_title_only() {
        let parsed = parse("Just a title").unwrap();
        assert_eq!(parsed.title, "Just a title");
        assert!(parsed.lines.is_empty());
        assert!(parsed.todo.is_empty());
        assert!(parsed.done.is_empty());
    }

    #[test]
    fn parse_empty_text_is_an_error() {
        assert_eq!(parse(""), Err(ParseError::Empty));
    }

    #[test]
    fn parse_lone_newline_gives_empty_title() {
        let parsed = parse("\n").unwrap();
        assert_eq!(parsed.title, "");
        assert!(parsed.lines.is_empty());
    }

    #[test]
    fn parse_strips_carriage_returns() {
        let parsed = parse("Title\r\nbody\r\n - item\r\n").unwrap();
        assert_eq!(parsed.title, "Title");
        assert_eq!(parsed.lines, strings(&["body"]));
        assert_eq!(parsed.todo, strings(&["item"]));
    }

    #[test]
    fn parse_drops_only_one_trailing_empty_line() {
        let parsed = parse("Title\nbody\n\n").unwrap();
        assert_eq!(parsed.lines, strings(&["body", ""]));
    }

    #[test]
    fn parse_keeps_interior_blank_lines() {
        let parsed = parse("Title\n\nsecond paragraph\n").unwrap();
        assert_eq!(parsed.lines, strings(&["", "second paragraph"]));
    }

    #[test]
    fn parse_marker_must_be_at_line_start() {
        let parsed = parse("Title\n- not an item\nX also not\n  - indented twice\n").unwrap();
        assert_eq!(
            parsed.lines,
            strings(&["- not an item", "X also not", "  - indented twice"])
        );
        assert!(parsed.todo.is_empty());
    }

    #[test]
    fn parse_marker_with_empty_item() {
        let parsed = parse("Title\n - \n X \n").unwrap();
        assert_eq!(parsed.todo, strings(&[""]));
        assert_eq!(parsed.done, strings(&[""]));
    }

    #[test]
    fn parse_lowercase_x_is_body() {
        let parsed = parse("Title\n x done?\n").unwrap();
        assert_eq!(parsed.lines, strings(&[" x done?"]));
    }

    #[test]
    fn parse_title_line_is_never_classified() {
        let parsed = parse(" - looks like an item\n").unwrap();
        assert_eq!(parsed.title, " - looks like an item");
        assert!(parsed.todo.is_empty());
    }

    #[test]
    fn into_note_attaches_identity() {
        let note = parse("Groceries\n - eggs\n")
            .unwrap()
            .into_note(test_note_id(), test_datetime());
        assert_eq!(note.id(), &test_note_id());
        assert_eq!(note.created(), test_datetime());
        assert_eq!(note.todo(), ["eggs"]);
    }

    // ===========================================
    // Serializing
    // ===========================================

    #[test]
    fn serialize_orders_sections() {
        let note = Note::builder(test_note_id(), "Groceries", test_datetime())
            .lines(strings(&["Buy milk"]))
            .todo(strings(&["eggs", "bread"]))
            .done(strings(&["bananas"]))
            .build();
        assert_eq!(
            serialize(&note),
            "Groceries\nBuy milk\n - eggs\n - bread\n X bananas\n"
        );
    }

    #[test]
    fn serialize_title_only() {
        let note = Note::builder(test_note_id(), "Solo", test_datetime()).build();
        assert_eq!(serialize(&note), "Solo\n");
    }

    // ===========================================
    // Round trip
    // ===========================================

    #[test]
    fn roundtrip_preserves_content() {
        let note = Note::builder(test_note_id(), "Trip", test_datetime())
            .lines(strings(&["", "pack light", "  indented"]))
            .todo(strings(&["passport", "  spaced  "]))
            .done(strings(&["book flights"]))
            .build();

        let reparsed = parse(&serialize(&note)).unwrap();
        assert_eq!(reparsed.title, note.title());
        assert_eq!(reparsed.lines, note.lines());
        assert_eq!(reparsed.todo, note.todo());
        assert_eq!(reparsed.done, note.done());
    }

    #[test]
    fn roundtrip_empty_title() {
        let note = Note::builder(test_note_id(), "", test_datetime())
            .todo(strings(&["x"]))
            .build();
        let reparsed = parse(&serialize(&note)).unwrap();
        assert_eq!(reparsed.title, "");
        assert_eq!(reparsed.todo, strings(&["x"]));
    }

    #[test]
    fn body_line_with_marker_is_reclassified() {
        let note = Note::builder(test_note_id(), "Ambiguous", test_datetime())
            .lines(strings(&[" - looks like an item"]))
            .build();
        let reparsed = parse(&serialize(&note)).unwrap();
        assert!(reparsed.lines.is_empty());
        assert_eq!(reparsed.todo, strings(&["looks like an item"]));
    }

    #[test]
    fn parse_then_serialize_is_stable_for_canonical_text() {
        let text = "Groceries\nBuy milk\n - eggs\n X bananas\n";
        let note = parse(text)
            .unwrap()
            .into_note(test_note_id(), test_datetime());
        assert_eq!(serialize(&note), text);
    }
}
