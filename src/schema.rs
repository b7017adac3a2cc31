use std::sync::Arc;

use juniper::{graphql_object, EmptySubscription, FieldResult, RootNode};

use crate::handlers;
use crate::note::{Note, NoteInput};
use crate::store::NoteStore;

/// Context for Juniper
pub struct Context {
    pub store: Arc<dyn NoteStore>,
}

impl juniper::Context for Context {}

impl Context {
    pub fn new<S: NoteStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

pub struct Query;

#[graphql_object(context = Context)]
impl Query {
    /// Get note by id, null when it does not exist
    async fn get_note_by_id(context: &Context, note_id: String) -> FieldResult<Option<Note>> {
        Ok(handlers::get_note_by_id(context.store.as_ref(), &note_id).await?)
    }

    /// Get all notes
    async fn list_notes(context: &Context) -> FieldResult<Vec<Note>> {
        Ok(handlers::list_notes(context.store.as_ref()).await?)
    }
}

pub struct Mutation;

#[graphql_object(context = Context)]
impl Mutation {
    /// Create note, generating its id when none is given
    async fn create_note(context: &Context, note: NoteInput) -> FieldResult<Note> {
        Ok(handlers::create_note(context.store.as_ref(), note).await?)
    }

    /// Overwrite note with the given id
    async fn update_note(context: &Context, note: NoteInput) -> FieldResult<Note> {
        Ok(handlers::update_note(context.store.as_ref(), note).await?)
    }

    /// Delete note and return its id
    async fn delete_note(context: &Context, note_id: String) -> FieldResult<String> {
        Ok(handlers::delete_note(context.store.as_ref(), note_id).await?)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

pub fn schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
