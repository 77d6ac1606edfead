//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Notes file
    pub file: Option<PathBuf>,

    /// Editor command for writing notes, may include arguments
    pub editor: Option<String>,

    /// How notes are rendered in the terminal
    #[serde(default)]
    pub style: StyleConfig,
}

/// The `[style]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StyleConfig {
    /// Spaces before body lines and section heads
    pub indent_width: usize,
    /// Column to wrap body lines and items at; 0 disables wrapping
    pub wrap_width: usize,
    pub title: ColorPair,
    pub date: ColorPair,
    pub id: ColorPair,
    pub content: ColorPair,
    pub todo_head: ColorPair,
    pub todo_bullet: ColorPair,
    pub todo_item: ColorPair,
    pub done_head: ColorPair,
    pub done_bullet: ColorPair,
    pub done_item: ColorPair,
}

/// Foreground and background color names, e.g. `fg = "yellow"`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ColorPair {
    pub fg: Option<String>,
    pub bg: Option<String>,
}

impl ColorPair {
    fn foreground(name: &str) -> Self {
        Self {
            fg: Some(name.to_string()),
            bg: None,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            wrap_width: 0,
            title: ColorPair::foreground("yellow"),
            date: ColorPair::foreground("cyan"),
            id: ColorPair::foreground("magenta"),
            content: ColorPair::default(),
            todo_head: ColorPair::foreground("red"),
            todo_bullet: ColorPair::foreground("red"),
            todo_item: ColorPair::default(),
            done_head: ColorPair::foreground("green"),
            done_bullet: ColorPair::foreground("green"),
            done_item: ColorPair::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or the default location when `None`.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jot/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
            .join("config.toml")
    }

    /// Resolve the notes file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--file` argument
    /// 2. Config file `file` setting
    /// 3. `notes.json` in the user data directory
    pub fn notes_file(&self, cli_file: Option<&PathBuf>) -> PathBuf {
        cli_file
            .cloned()
            .or_else(|| self.file.clone())
            .unwrap_or_else(Self::default_notes_file)
    }

    fn default_notes_file() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
            .join("notes.json")
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $EDITOR environment variable
    /// 3. $VISUAL environment variable
    /// 4. "vi" as fallback
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| "vi".to_string())
    }
}
