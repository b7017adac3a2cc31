//! One function per GraphQL field. Each issues exactly one storage operation.

use failure::Error as Failure;
use tracing::debug;

use crate::error::Error;
use crate::note::{Note, NoteInput};
use crate::store::NoteStore;

/// Point lookup. A miss is `Ok(None)`.
pub async fn get_note_by_id<S>(store: &S, note_id: &str) -> Result<Option<Note>, Failure>
where
    S: NoteStore + ?Sized,
{
    let note = store.get(note_id).await?;
    debug!(note_id, found = note.is_some(), "get note");
    Ok(note)
}

/// Store a new note, generating its id when the input has none.
///
/// An existing note with the same id is overwritten.
pub async fn create_note<S>(store: &S, input: NoteInput) -> Result<Note, Failure>
where
    S: NoteStore + ?Sized,
{
    let note = input.into_note();
    store.put(&note).await?;
    debug!(note_id = %note.id, "created note");
    Ok(note)
}

pub async fn list_notes<S>(store: &S) -> Result<Vec<Note>, Failure>
where
    S: NoteStore + ?Sized,
{
    let notes = store.scan().await?;
    debug!(count = notes.len(), "listed notes");
    Ok(notes)
}

/// Overwrite the whole record of an existing id.
pub async fn update_note<S>(store: &S, input: NoteInput) -> Result<Note, Failure>
where
    S: NoteStore + ?Sized,
{
    match input.id.as_deref() {
        Some(id) if !id.is_empty() => {}
        _ => return Err(Error::MissingArgument("note.id").into()),
    }
    let note = input.into_note();
    store.put(&note).await?;
    debug!(note_id = %note.id, "updated note");
    Ok(note)
}

/// Delete by key and hand back the id.
pub async fn delete_note<S>(store: &S, note_id: String) -> Result<String, Failure>
where
    S: NoteStore + ?Sized,
{
    store.delete(&note_id).await?;
    debug!(note_id = %note_id, "deleted note");
    Ok(note_id)
}
