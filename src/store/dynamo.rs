use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use failure::Error as Failure;
use maplit::hashmap;
use tracing::debug;

use super::NoteStore;
use crate::config::Config;
use crate::error::Error;
use crate::note::Note;

const ID: &str = "id";
const CONTENT: &str = "content";
const CREATED_AT: &str = "createdAt";

type Item = HashMap<String, AttributeValue>;

///
/// Notes table in DynamoDB, partition key `id` (string)
///
#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            table_name: config.table_name.to_owned(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn key(id: &str) -> Item {
    hashmap! {ID.to_owned() => AttributeValue::S(id.to_owned())}
}

fn item_from_note(note: &Note) -> Item {
    let mut item = hashmap! {
        ID.to_owned() => AttributeValue::S(note.id.to_owned()),
        CONTENT.to_owned() => AttributeValue::S(note.content.to_owned()),
    };
    if let Some(created_at) = &note.created_at {
        item.insert(
            CREATED_AT.to_owned(),
            AttributeValue::S(created_at.to_owned()),
        );
    }
    item
}

fn string_attribute(item: &Item, name: &'static str) -> Result<Option<String>, Error> {
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(value)) => Ok(Some(value.to_owned())),
        Some(_) => Err(Error::MalformedItem(name)),
    }
}

fn note_from_item(item: &Item) -> Result<Note, Error> {
    let id = string_attribute(item, ID)?.ok_or(Error::MalformedItem(ID))?;
    let content = string_attribute(item, CONTENT)?.ok_or(Error::MalformedItem(CONTENT))?;
    Ok(Note {
        id,
        content,
        created_at: string_attribute(item, CREATED_AT)?,
    })
}

#[async_trait]
impl NoteStore for DynamoStore {
    async fn get(&self, id: &str) -> Result<Option<Note>, Failure> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key(id)))
            .send()
            .await?;
        match output.item() {
            Some(item) => Ok(Some(note_from_item(item)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, note: &Note) -> Result<(), Failure> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_from_note(note)))
            .send()
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), Failure> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key(id)))
            .send()
            .await?;
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Note>, Failure> {
        let mut notes = Vec::new();
        let mut start_key: Option<Item> = None;
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await?;
            for item in output.items() {
                notes.push(note_from_item(item)?);
            }
            match output.last_evaluated_key() {
                Some(last_key) if !last_key.is_empty() => {
                    debug!(table = %self.table_name, scanned = notes.len(), "scan continues");
                    start_key = Some(last_key.to_owned());
                }
                _ => break,
            }
        }
        Ok(notes)
    }
}
