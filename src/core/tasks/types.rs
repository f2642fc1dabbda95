use crate::{
    anki::DeckName,
    core::AnkiError,
};

#[derive(Debug, Clone)]
pub enum TaskResult {
    DecksLoaded(Result<Vec<DeckName>, AnkiError>),
    NoteAdded(Result<u64, AnkiError>),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::DecksLoaded(_) => "decks_loaded",
            TaskResult::NoteAdded(_) => "note_added",
        }
    }
}
