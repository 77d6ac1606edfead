//! Output format types for CLI commands.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Note;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub notes: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(notes: T) -> Self {
        Self { notes }
    }
}

/// Serializes notes as `{"notes": [...]}`, using the stored field names.
pub fn notes_json(notes: &[&Note]) -> Result<String> {
    serde_json::to_string_pretty(&Output::new(notes)).context("failed to serialize notes")
}
