use std::collections::BTreeMap;

use async_trait::async_trait;
use failure::Error as Failure;
use tokio::sync::RwLock;

use super::NoteStore;
use crate::note::Note;

/// In-process note store. Scans return notes ordered by id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: RwLock<BTreeMap<String, Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes<I: IntoIterator<Item = Note>>(notes: I) -> Self {
        let notes = notes
            .into_iter()
            .map(|note| (note.id.to_owned(), note))
            .collect();
        Self {
            notes: RwLock::new(notes),
        }
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn get(&self, id: &str) -> Result<Option<Note>, Failure> {
        Ok(self.notes.read().await.get(id).cloned())
    }

    async fn put(&self, note: &Note) -> Result<(), Failure> {
        self.notes
            .write()
            .await
            .insert(note.id.to_owned(), note.to_owned());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), Failure> {
        self.notes.write().await.remove(id);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Note>, Failure> {
        Ok(self.notes.read().await.values().cloned().collect())
    }
}
