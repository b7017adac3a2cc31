use uuid::Uuid;

/// GraphQL type for a note
#[derive(
    juniper::GraphQLObject, serde_derive::Serialize, serde_derive::Deserialize, Clone, Debug, PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// unique identification of note
    pub id: String,
    /// text of note
    pub content: String,
    /// client supplied timestamp used for ordering
    pub created_at: Option<String>,
}

/// GraphQL input for creating or overwriting a note
#[derive(
    juniper::GraphQLInputObject,
    serde_derive::Serialize,
    serde_derive::Deserialize,
    Clone,
    Debug,
    Default,
    PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct NoteInput {
    /// unique identification of note, generated on create when missing
    pub id: Option<String>,
    /// text of note
    pub content: String,
    /// client supplied timestamp used for ordering
    pub created_at: Option<String>,
}

impl NoteInput {
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Turn the input into a note, generating a fresh id if none (or an empty one) was given.
    pub fn into_note(self) -> Note {
        let NoteInput {
            id,
            content,
            created_at,
        } = self;
        let id = match id {
            Some(id) if !id.is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };
        Note {
            id,
            content,
            created_at,
        }
    }
}
