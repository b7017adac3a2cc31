use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use failure::Error as Failure;
use lambda_runtime::{LambdaEvent, Service};
use serde_json::Value;
use tracing::{error, warn, Instrument};

use crate::error::Error;
use crate::event::{AppSyncEvent, Arguments, Operation};
use crate::handlers;
use crate::store::NoteStore;

fn required<T>(argument: Option<T>, name: &'static str) -> Result<T, Error> {
    argument.ok_or(Error::MissingArgument(name))
}

/// Run the handler registered for the event's field name.
///
/// Unknown field names resolve to `null` without touching storage. Handler
/// failures are returned as they are.
pub async fn resolve<S>(store: &S, event: AppSyncEvent) -> Result<Value, Failure>
where
    S: NoteStore + ?Sized,
{
    let operation = match Operation::from_field_name(event.field_name()) {
        Some(operation) => operation,
        None => {
            warn!(field_name = %event.field_name(), "unknown field, resolving to null");
            return Ok(Value::Null);
        }
    };
    let Arguments { note_id, note } = event.arguments;
    let value = match operation {
        Operation::GetNoteById => {
            let note_id = required(note_id, "noteId")?;
            serde_json::to_value(handlers::get_note_by_id(store, &note_id).await?)?
        }
        Operation::ListNotes => serde_json::to_value(handlers::list_notes(store).await?)?,
        Operation::CreateNote => {
            let note = required(note, "note")?;
            serde_json::to_value(handlers::create_note(store, note).await?)?
        }
        Operation::UpdateNote => {
            let note = required(note, "note")?;
            serde_json::to_value(handlers::update_note(store, note).await?)?
        }
        Operation::DeleteNote => {
            let note_id = required(note_id, "noteId")?;
            serde_json::to_value(handlers::delete_note(store, note_id).await?)?
        }
    };
    Ok(value)
}

/// AppSync direct Lambda resolver for the notes fields
pub struct NoteResolver<S>
where
    S: NoteStore + 'static,
{
    store: Arc<S>,
}

impl<S> NoteResolver<S>
where
    S: NoteStore + 'static,
{
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> Clone for NoteResolver<S>
where
    S: NoteStore + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> Service<LambdaEvent<AppSyncEvent>> for NoteResolver<S>
where
    S: NoteStore + 'static,
{
    type Response = Value;
    type Error = lambda_runtime::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Value, lambda_runtime::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: LambdaEvent<AppSyncEvent>) -> Self::Future {
        let store = Arc::clone(&self.store);
        let (event, context) = req.into_parts();
        let span = tracing::info_span!(
            "resolve",
            request_id = %context.request_id,
            field_name = %event.field_name(),
        );
        Box::pin(
            async move {
                match resolve(store.as_ref(), event).await {
                    Ok(value) => Ok(value),
                    Err(err) => {
                        error!(error = %err, "resolver failed");
                        Err(err.compat().into())
                    }
                }
            }
            .instrument(span),
        )
    }
}
