use crate::error::Error;

/// Name of the environment variable holding the DynamoDB table name.
pub const TABLE_NAME_VAR: &str = "NOTES_TABLE";

///
/// Process configuration, read once at cold start
///
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// DynamoDB table holding the notes
    pub table_name: String,
}

impl Config {
    pub fn new<S: Into<String>>(table_name: S) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(TABLE_NAME_VAR) {
            Some(table_name) if !table_name.trim().is_empty() => Ok(Self::new(table_name)),
            _ => Err(Error::MissingConfig(TABLE_NAME_VAR)),
        }
    }
}
