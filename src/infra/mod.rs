//! File I/O, text format, time and id sources

mod clock;
mod fs;
mod text_format;

pub use clock::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UlidGenerator};
pub use fs::FileStorage;
pub use text_format::{DONE_MARKER, ParseError, ParsedText, TODO_MARKER, parse, serialize};
