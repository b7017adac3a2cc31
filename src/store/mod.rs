//! Storage backends for notes.
//!
//! Handlers talk to storage only through [`NoteStore`], so the resolver runs
//! unchanged against DynamoDB in production and against [`MemoryStore`] in
//! tests and local runs.

use async_trait::async_trait;
use failure::Error as Failure;

use crate::note::Note;

mod dynamo;
mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

/// A key-value collection of notes keyed by `id`.
///
/// Every method is a single storage operation. Errors are storage faults and
/// are returned as the backend produced them.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Point lookup, `None` when no note has this id.
    async fn get(&self, id: &str) -> Result<Option<Note>, Failure>;

    /// Write the full record, overwriting any note with the same id.
    async fn put(&self, note: &Note) -> Result<(), Failure>;

    /// Remove the note with this id. Removing an absent id succeeds.
    async fn delete(&self, id: &str) -> Result<(), Failure>;

    /// Every note in the collection.
    async fn scan(&self) -> Result<Vec<Note>, Failure>;
}
