//! Whole-file persistence seam used by the note store.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use thiserror::Error;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("not found: {location}")]
    NotFound { location: String },

    #[error("permission denied: {location}")]
    PermissionDenied { location: String },

    #[error("parent directory does not exist: {location}")]
    ParentNotFound { location: String },

    #[error("I/O error for {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {location}: {source}")]
    AtomicWrite {
        location: String,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Maps an io::Error to the matching variant.
    pub fn from_io(location: impl Into<String>, error: io::Error) -> Self {
        let location = location.into();
        match error.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound { location },
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied { location },
            _ => StorageError::Io {
                location,
                source: error,
            },
        }
    }
}

/// Reads and writes the complete persisted collection as bytes.
///
/// There is no partial update: every write replaces everything. There is no
/// locking either; two processes writing the same location race and the last
/// writer wins.
pub trait Storage {
    /// Human-readable location for diagnostics (a path, or a label).
    fn location(&self) -> String;

    /// Whether anything has been persisted at the location yet.
    fn exists(&self) -> bool;

    /// Reads the full persisted contents.
    fn read_all(&self) -> Result<Vec<u8>, StorageError>;

    /// Replaces the full persisted contents.
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
struct MemoryState {
    bytes: Option<Vec<u8>>,
    writes: usize,
}

/// In-memory storage. Clones share the same contents, so a test can keep a
/// handle while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryStorage {
    /// Storage with nothing persisted yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with the given bytes.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let storage = Self::new();
        storage.state.borrow_mut().bytes = Some(bytes.into());
        storage
    }

    /// Current persisted contents.
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.state.borrow().bytes.clone()
    }

    /// Number of completed writes.
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }
}

impl Storage for MemoryStorage {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn exists(&self) -> bool {
        self.state.borrow().bytes.is_some()
    }

    fn read_all(&self) -> Result<Vec<u8>, StorageError> {
        self.bytes().ok_or_else(|| StorageError::NotFound {
            location: self.location(),
        })
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        state.bytes = Some(bytes.to_vec());
        state.writes += 1;
        Ok(())
    }
}
