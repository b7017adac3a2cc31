#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use failure::{format_err, Error as Failure};
use juniper_aws_appsync_notes::{MemoryStore, Note, NoteStore};

/// Storage call observed by [`RecordingStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(String),
    Put(Note),
    Delete(String),
    Scan,
}

/// Memory store that records every storage call made through it.
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    calls: Mutex<Vec<Call>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl NoteStore for RecordingStore {
    async fn get(&self, id: &str) -> Result<Option<Note>, Failure> {
        self.record(Call::Get(id.to_owned()));
        self.inner.get(id).await
    }

    async fn put(&self, note: &Note) -> Result<(), Failure> {
        self.record(Call::Put(note.to_owned()));
        self.inner.put(note).await
    }

    async fn delete(&self, id: &str) -> Result<(), Failure> {
        self.record(Call::Delete(id.to_owned()));
        self.inner.delete(id).await
    }

    async fn scan(&self) -> Result<Vec<Note>, Failure> {
        self.record(Call::Scan);
        self.inner.scan().await
    }
}

/// Store whose every call fails as an unreachable table would.
pub struct FailingStore;

pub const FAULT: &str = "ProvisionedThroughputExceededException: rate exceeded";

#[async_trait]
impl NoteStore for FailingStore {
    async fn get(&self, _id: &str) -> Result<Option<Note>, Failure> {
        Err(format_err!("{}", FAULT))
    }

    async fn put(&self, _note: &Note) -> Result<(), Failure> {
        Err(format_err!("{}", FAULT))
    }

    async fn delete(&self, _id: &str) -> Result<(), Failure> {
        Err(format_err!("{}", FAULT))
    }

    async fn scan(&self) -> Result<Vec<Note>, Failure> {
        Err(format_err!("{}", FAULT))
    }
}

pub fn note(id: &str, content: &str) -> Note {
    Note {
        id: id.into(),
        content: content.into(),
        created_at: None,
    }
}
