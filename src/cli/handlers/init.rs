use anyhow::{Context, Result, anyhow};

use crate::cli::InitArgs;
use crate::infra::FileStorage;
use crate::store::{NoteStore, StoreError};

pub fn handle_init(args: &InitArgs, storage: FileStorage) -> Result<()> {
    storage
        .create_parent_dir()
        .context("failed to create notes directory")?;

    let path = storage.path().to_path_buf();
    NoteStore::initialize(storage, args.force).map_err(|err| match err {
        StoreError::AlreadyExists { .. } => anyhow!("{} (use --force to replace it)", err),
        other => other.into(),
    })?;

    println!("Initialized empty notes file at {}", path.display());
    Ok(())
}
