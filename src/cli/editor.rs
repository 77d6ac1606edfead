//! Composing note text in an external editor.

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Opens a file for the user to edit and returns once they are done.
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Runs an editor command such as `vi` or `code --wait`.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl EditorLauncher for CommandEditor {
    fn open(&self, path: &Path) -> Result<()> {
        // Editor command may include args like "code --wait"
        let mut parts = self.command.split_whitespace();
        let Some(cmd) = parts.next() else {
            bail!("cannot launch text editor: editor command is empty");
        };

        debug!(editor = %self.command, path = %path.display(), "launching editor");
        let status = Command::new(cmd)
            .args(parts)
            .arg(path)
            .status()
            .with_context(|| format!("cannot launch text editor '{}'", self.command))?;

        if !status.success() {
            bail!("editor '{}' exited with non-zero status", self.command);
        }

        Ok(())
    }
}

/// Writes `seed` to a temporary `.txt` file, lets the user edit it, and
/// returns what they saved. The file is removed afterwards.
pub fn compose<E: EditorLauncher>(editor: &E, seed: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix("jot-")
        .suffix(".txt")
        .tempfile()
        .context("failed to create temporary file for editing")?;

    file.write_all(seed.as_bytes())
        .and_then(|()| file.flush())
        .context("failed to write temporary file for editing")?;

    editor.open(file.path())?;

    std::fs::read_to_string(file.path()).context("failed to read back edited text")
}
