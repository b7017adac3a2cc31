use crate::note::NoteInput;

/// Resolver event sent by AppSync to a direct Lambda data source.
///
/// Only the parts the router needs are modelled, the rest of the payload
/// (identity, request headers, source, stash) is ignored.
#[derive(serde_derive::Deserialize, Clone, Debug, PartialEq)]
pub struct AppSyncEvent {
    pub info: Info,
    #[serde(default)]
    pub arguments: Arguments,
}

#[derive(serde_derive::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub field_name: String,
    #[serde(default)]
    pub parent_type_name: Option<String>,
}

#[derive(serde_derive::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Arguments {
    pub note_id: Option<String>,
    pub note: Option<NoteInput>,
}

impl AppSyncEvent {
    pub fn new<S: Into<String>>(field_name: S, arguments: Arguments) -> Self {
        Self {
            info: Info {
                field_name: field_name.into(),
                parent_type_name: None,
            },
            arguments,
        }
    }

    pub fn field_name(&self) -> &str {
        &self.info.field_name
    }
}

/// The closed set of GraphQL fields served by this function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetNoteById,
    ListNotes,
    CreateNote,
    UpdateNote,
    DeleteNote,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::GetNoteById,
        Operation::ListNotes,
        Operation::CreateNote,
        Operation::UpdateNote,
        Operation::DeleteNote,
    ];

    pub fn field_name(self) -> &'static str {
        match self {
            Operation::GetNoteById => "getNoteById",
            Operation::ListNotes => "listNotes",
            Operation::CreateNote => "createNote",
            Operation::UpdateNote => "updateNote",
            Operation::DeleteNote => "deleteNote",
        }
    }

    /// GraphQL root type the field belongs to.
    pub fn parent_type(self) -> &'static str {
        match self {
            Operation::GetNoteById | Operation::ListNotes => "Query",
            Operation::CreateNote | Operation::UpdateNote | Operation::DeleteNote => "Mutation",
        }
    }

    pub fn from_field_name(field_name: &str) -> Option<Self> {
        match field_name {
            "getNoteById" => Some(Operation::GetNoteById),
            "listNotes" => Some(Operation::ListNotes),
            "createNote" => Some(Operation::CreateNote),
            "updateNote" => Some(Operation::UpdateNote),
            "deleteNote" => Some(Operation::DeleteNote),
            _ => None,
        }
    }

    /// Position of the variant in [`Operation::ALL`].
    const fn index(self) -> usize {
        match self {
            Operation::GetNoteById => 0,
            Operation::ListNotes => 1,
            Operation::CreateNote => 2,
            Operation::UpdateNote => 3,
            Operation::DeleteNote => 4,
        }
    }
}

// `ALL` follows `index` order with no gaps or repeats.
const _: () = {
    let mut position = 0;
    while position < Operation::ALL.len() {
        assert!(Operation::ALL[position].index() == position);
        position += 1;
    }
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        for operation in Operation::ALL.iter().copied() {
            assert_eq!(
                Operation::from_field_name(operation.field_name()),
                Some(operation)
            );
        }
        for (position, operation) in Operation::ALL.iter().enumerate() {
            assert_eq!(operation.index(), position);
        }
        assert_eq!(Operation::from_field_name("archiveNote"), None);
        assert_eq!(Operation::from_field_name("GetNoteById"), None);
    }

    #[test]
    fn deserializes_appsync_payload() {
        let event: AppSyncEvent = serde_json::from_value(serde_json::json!({
            "info": {
                "fieldName": "getNoteById",
                "parentTypeName": "Query",
                "selectionSetList": ["id", "content"]
            },
            "arguments": { "noteId": "n-1" },
            "identity": null,
            "source": null,
            "request": { "headers": {} }
        }))
        .unwrap();
        assert_eq!(event.field_name(), "getNoteById");
        assert_eq!(event.info.parent_type_name.as_deref(), Some("Query"));
        assert_eq!(event.arguments.note_id.as_deref(), Some("n-1"));
        assert_eq!(event.arguments.note, None);
    }

    #[test]
    fn arguments_default_to_empty() {
        let event: AppSyncEvent =
            serde_json::from_str(r#"{"info":{"fieldName":"listNotes"}}"#).unwrap();
        assert_eq!(event.arguments, Arguments::default());
    }
}
