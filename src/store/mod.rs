//! Note store: the loaded collection plus its persistence

mod note_store;
mod storage;

pub use note_store::{NoteStore, StoreError};
pub use storage::{MemoryStorage, Storage, StorageError};
