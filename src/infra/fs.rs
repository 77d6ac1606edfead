//! Notes file persistence with atomic writes.

use crate::store::{Storage, StorageError};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A notes file on disk.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash leaves either the old contents or the new ones.
///
/// A symlinked path is resolved first and the file it points at is replaced,
/// keeping the link. The replacement takes over the permissions of the file it
/// replaces; a brand new file gets the temp file's owner-only mode (0600 on
/// Unix).
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the directory the notes file lives in, if missing.
    pub fn create_parent_dir(&self) -> Result<(), StorageError> {
        let parent = self.parent_dir();
        std::fs::create_dir_all(&parent).map_err(|e| StorageError::from_io(display(&parent), e))
    }

    fn parent_dir(&self) -> PathBuf {
        parent_of(&self.path)
    }

    /// The file a write replaces: the symlink target when the path is a
    /// symlink, otherwise the path itself.
    fn write_target(&self) -> PathBuf {
        std::fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }
}

impl Storage for FileStorage {
    fn location(&self) -> String {
        display(&self.path)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_all(&self) -> Result<Vec<u8>, StorageError> {
        std::fs::read(&self.path).map_err(|e| StorageError::from_io(self.location(), e))
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        let target = self.write_target();
        let parent = parent_of(&target);
        if !parent.is_dir() {
            return Err(StorageError::ParentNotFound {
                location: display(&parent),
            });
        }

        let mut temp = NamedTempFile::new_in(&parent).map_err(|e| StorageError::Io {
            location: self.location(),
            source: e,
        })?;

        temp.write_all(bytes).map_err(|e| StorageError::Io {
            location: self.location(),
            source: e,
        })?;

        if let Ok(metadata) = std::fs::metadata(&target) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| StorageError::Io {
                    location: self.location(),
                    source: e,
                })?;
        }

        temp.persist(&target)
            .map_err(|e| StorageError::AtomicWrite {
                location: self.location(),
                source: e.error,
            })?;

        Ok(())
    }
}

/// Parent directory, treating a bare file name as relative to `.`.
fn parent_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
