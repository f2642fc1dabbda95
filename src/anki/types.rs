use std::fmt;

use serde::Serialize;

/// A deck name as reported by AnkiConnect. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeckName(String);

impl DeckName {
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteFields {
    #[serde(rename = "Front")]
    pub front: String,
    #[serde(rename = "Back")]
    pub back: String,
}

/// Payload of the `addNote` action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub deck_name: String,
    pub model_name: String,
    pub fields: NoteFields,
    pub tags: Vec<String>,
}
