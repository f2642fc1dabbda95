use std::{
    collections::HashMap,
    sync::Mutex,
};

use super::{
    NewNote,
    NoteService,
};
use crate::core::AnkiError;

/// In-memory `NoteService` that replays canned results and records every action it receives.
pub struct FakeService {
    pub deck_names: Result<Option<Vec<String>>, AnkiError>,
    pub deck_names_and_ids: Result<HashMap<String, u64>, AnkiError>,
    pub add_note: Result<u64, AnkiError>,
    pub(crate) calls: Mutex<Vec<&'static str>>,
    pub(crate) notes: Mutex<Vec<NewNote>>,
}

impl FakeService {
    pub fn with_decks(decks: &[&str]) -> Self {
        Self {
            deck_names: Ok(Some(decks.iter().map(|d| d.to_string()).collect())),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn notes(&self) -> Vec<NewNote> {
        self.notes.lock().unwrap().clone()
    }

    fn record(&self, action: &'static str) {
        self.calls.lock().unwrap().push(action);
    }
}

impl Default for FakeService {
    fn default() -> Self {
        Self {
            deck_names: Ok(Some(Vec::new())),
            deck_names_and_ids: Ok(HashMap::new()),
            add_note: Ok(1),
            calls: Mutex::new(Vec::new()),
            notes: Mutex::new(Vec::new()),
        }
    }
}

impl NoteService for FakeService {
    async fn deck_names(&self) -> Result<Option<Vec<String>>, AnkiError> {
        self.record("deckNames");
        self.deck_names.clone()
    }

    async fn deck_names_and_ids(&self) -> Result<HashMap<String, u64>, AnkiError> {
        self.record("deckNamesAndIds");
        self.deck_names_and_ids.clone()
    }

    async fn add_note(&self, note: &NewNote) -> Result<u64, AnkiError> {
        self.record("addNote");
        self.notes.lock().unwrap().push(note.clone());
        self.add_note.clone()
    }
}
