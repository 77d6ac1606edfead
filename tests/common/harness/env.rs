//! Isolated test environment with temp directory.

use super::{JotCommand, TestNote};
use jot::domain::{Note, NoteCollection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes file and config.
///
/// Creates a temp directory that is automatically cleaned up on drop. The
/// notes file and config file live inside it; neither exists until written.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Creates an environment whose notes file holds the given notes.
    pub fn with_notes(notes: &[TestNote]) -> Self {
        let env = Self::new();
        env.add_notes(notes);
        env
    }

    /// Returns the temp directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the notes file.
    pub fn notes_file(&self) -> PathBuf {
        self.root.join("notes.json")
    }

    /// Returns the path of the config file.
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Writes the notes file containing exactly these notes.
    pub fn add_notes(&self, notes: &[TestNote]) {
        let mut collection = NoteCollection::new();
        for note in notes {
            collection.push(note.to_note());
        }
        let json = serde_json::to_string_pretty(&collection).expect("Failed to encode notes");
        std::fs::write(self.notes_file(), json).expect("Failed to write notes file");
    }

    /// Writes raw contents to the notes file.
    pub fn write_notes_file(&self, content: &str) {
        std::fs::write(self.notes_file(), content).expect("Failed to write notes file");
    }

    /// Writes the config file.
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_file(), content).expect("Failed to write config file");
    }

    /// Reads the raw notes file.
    pub fn read_notes_file(&self) -> String {
        std::fs::read_to_string(self.notes_file()).expect("Failed to read notes file")
    }

    /// Decodes the notes file.
    pub fn notes(&self) -> Vec<Note> {
        let collection: NoteCollection =
            serde_json::from_str(&self.read_notes_file()).expect("Notes file is not valid JSON");
        collection.notes().to_vec()
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new()
            .file(&self.notes_file())
            .config(&self.config_file())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir());
        assert!(!env.notes_file().exists());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--file");
        assert_eq!(args[1], env.notes_file().to_string_lossy());
        assert_eq!(args[2], "--config");
        assert_eq!(args[3], env.config_file().to_string_lossy());
    }

    #[test]
    fn test_env_add_notes_round_trips() {
        let env = TestEnv::with_notes(&[
            TestNote::new("First").todo("a"),
            TestNote::new("Second").done("b"),
        ]);

        let notes = env.notes();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title(), "First");
        assert_eq!(notes[0].todo(), ["a"]);
        assert_eq!(notes[1].done(), ["b"]);
    }
}
