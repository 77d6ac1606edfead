//! Note resolution utilities.

use anyhow::{Error, Result, anyhow};
use std::fmt;

use crate::domain::{Note, NoteId};
use crate::infra::{Clock, IdGenerator};
use crate::store::{NoteStore, Storage};

/// A note named on the command line, either by id or (with `-t`) by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteRef {
    Id(NoteId),
    Title(String),
}

impl NoteRef {
    /// Interprets a NOTE argument.
    pub fn from_arg(note: &str, by_title: bool) -> Result<Self> {
        if by_title {
            Ok(NoteRef::Title(note.to_string()))
        } else {
            Ok(NoteRef::Id(note.parse()?))
        }
    }

    /// Resolves to an id. Titles pick the most recently added match.
    pub fn resolve<S, C, G>(&self, store: &NoteStore<S, C, G>) -> Option<NoteId>
    where
        S: Storage,
        C: Clock,
        G: IdGenerator,
    {
        match self {
            NoteRef::Id(id) => store.find_by_id(id).map(|note| note.id().clone()),
            NoteRef::Title(title) => store.find_id_by_title(title),
        }
    }

    pub fn find<'s, S, C, G>(&self, store: &'s NoteStore<S, C, G>) -> Option<&'s Note>
    where
        S: Storage,
        C: Clock,
        G: IdGenerator,
    {
        match self {
            NoteRef::Id(id) => store.find_by_id(id),
            NoteRef::Title(title) => store
                .find_id_by_title(title)
                .and_then(|id| store.find_by_id(&id)),
        }
    }

    pub fn not_found(&self) -> Error {
        anyhow!("no note found with {}", self)
    }
}

impl fmt::Display for NoteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteRef::Id(id) => write!(f, "id: '{}'", id),
            NoteRef::Title(title) => write!(f, "title: '{}'", title),
        }
    }
}
