//! Terminal rendering of notes.

use chrono::{DateTime, Local, Utc};
use tracing::warn;
use yansi::{Color, Paint, Style};

use crate::cli::config::{ColorPair, StyleConfig};
use crate::domain::Note;

const DATE_FORMAT: &str = "%b %-d %-I:%M %Y";

/// Resolved styles for each element of a rendered note.
#[derive(Debug, Clone, Copy)]
struct Palette {
    title: Style,
    date: Style,
    id: Style,
    content: Style,
    todo_head: Style,
    todo_bullet: Style,
    todo_item: Style,
    done_head: Style,
    done_bullet: Style,
    done_item: Style,
}

impl Palette {
    fn from_config(style: &StyleConfig) -> Self {
        Self {
            title: resolve(&style.title),
            date: resolve(&style.date),
            id: resolve(&style.id),
            content: resolve(&style.content),
            todo_head: resolve(&style.todo_head),
            todo_bullet: resolve(&style.todo_bullet),
            todo_item: resolve(&style.todo_item),
            done_head: resolve(&style.done_head),
            done_bullet: resolve(&style.done_bullet),
            done_item: resolve(&style.done_item),
        }
    }
}

fn resolve(pair: &ColorPair) -> Style {
    let mut style = Style::new();
    if let Some(fg) = pair.fg.as_deref().and_then(parse_color) {
        style = style.fg(fg);
    }
    if let Some(bg) = pair.bg.as_deref().and_then(parse_color) {
        style = style.bg(bg);
    }
    style
}

/// Maps a color name such as `red`, `bright-blue` or `lightGreen` to a color.
///
/// `default` and the empty string mean "leave the terminal color alone".
fn parse_color(name: &str) -> Option<Color> {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect::<String>()
        .to_lowercase();

    let (bright, base) = match key
        .strip_prefix("bright")
        .or_else(|| key.strip_prefix("light"))
    {
        Some(rest) => (true, rest),
        None => (false, key.as_str()),
    };

    let color = match (base, bright) {
        ("" | "default", false) => return None,
        ("black", false) => Color::Black,
        ("red", false) => Color::Red,
        ("green", false) => Color::Green,
        ("yellow", false) => Color::Yellow,
        ("blue", false) => Color::Blue,
        ("magenta", false) => Color::Magenta,
        ("cyan", false) => Color::Cyan,
        ("white", false) => Color::White,
        ("black", true) => Color::BrightBlack,
        ("red", true) => Color::BrightRed,
        ("green", true) => Color::BrightGreen,
        ("yellow", true) => Color::BrightYellow,
        ("blue", true) => Color::BrightBlue,
        ("magenta", true) => Color::BrightMagenta,
        ("cyan", true) => Color::BrightCyan,
        ("white", true) => Color::BrightWhite,
        _ => {
            warn!(color = name, "unknown color name, ignoring");
            return None;
        }
    };
    Some(color)
}

/// Renders notes as styled text.
#[derive(Debug, Clone)]
pub struct Renderer {
    indent_width: usize,
    wrap_width: usize,
    palette: Palette,
    color: bool,
}

impl Renderer {
    /// Creates a renderer; `color` turns ANSI styling on or off.
    pub fn new(style: &StyleConfig, color: bool) -> Self {
        Self {
            indent_width: style.indent_width,
            wrap_width: style.wrap_width,
            palette: Palette::from_config(style),
            color,
        }
    }

    /// Renders a single note. With `headers_only`, stops after the ID line.
    pub fn render_note(&self, note: &Note, headers_only: bool) -> String {
        let p = &self.palette;
        let pad = " ".repeat(self.indent_width);
        let mut out = String::from("\n");

        push_line(&mut out, &self.paint(note.title(), p.title));
        push_line(
            &mut out,
            &format!("Taken: {}", self.paint(&format_time(note.created()), p.date)),
        );
        push_line(
            &mut out,
            &format!("ID: {}", self.paint(note.id().as_str(), p.id)),
        );

        if headers_only {
            return out;
        }

        let body_width = self.available(self.indent_width);
        for line in note.lines() {
            for piece in wrap(line, body_width) {
                if piece.is_empty() {
                    out.push('\n');
                } else {
                    push_line(&mut out, &format!("{pad}{}", self.paint(&piece, p.content)));
                }
            }
        }

        self.render_items(&mut out, "To-do:", note.todo(), p.todo_head, p.todo_bullet, p.todo_item);
        self.render_items(&mut out, "Done:", note.done(), p.done_head, p.done_bullet, p.done_item);
        out
    }

    /// Renders notes one after another.
    pub fn render_notes<'a>(
        &self,
        notes: impl IntoIterator<Item = &'a Note>,
        headers_only: bool,
    ) -> String {
        notes
            .into_iter()
            .map(|note| self.render_note(note, headers_only))
            .collect()
    }

    fn render_items(
        &self,
        out: &mut String,
        heading: &str,
        items: &[String],
        head: Style,
        bullet: Style,
        item: Style,
    ) {
        if items.is_empty() {
            return;
        }

        let pad = " ".repeat(self.indent_width);
        // "%5d)" with the default indent of two
        let number_width = self.indent_width + 3;
        let hanging = " ".repeat(number_width + 2);
        let item_width = self.available(number_width + 2);

        out.push('\n');
        push_line(out, &format!("{pad}{}", self.paint(heading, head)));
        for (n, text) in items.iter().enumerate() {
            let number = format!("{:>width$})", n, width = number_width);
            for (i, piece) in wrap(text, item_width).iter().enumerate() {
                if i == 0 {
                    push_line(
                        out,
                        &format!("{} {}", self.paint(&number, bullet), self.paint(piece, item)),
                    );
                } else {
                    push_line(out, &format!("{hanging}{}", self.paint(piece, item)));
                }
            }
        }
    }

    /// Columns left for text after `used`, or 0 when wrapping is off.
    fn available(&self, used: usize) -> usize {
        if self.wrap_width == 0 {
            0
        } else {
            self.wrap_width.saturating_sub(used).max(1)
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.paint(style).to_string()
        } else {
            text.to_string()
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Formats a creation time like `Jan 2 3:04 2006` in local time.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format(DATE_FORMAT).to_string()
}

/// Greedy word wrap. A width of 0, or a line that already fits, is returned
/// untouched; words longer than the width get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.chars().count() <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
