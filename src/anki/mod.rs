use std::{
    collections::HashMap,
    future::Future,
};

use tracing::{
    debug,
    info,
    warn,
};

use crate::core::AnkiError;

pub mod api;
#[cfg(test)]
pub(crate) mod fake;
pub mod types;

pub use api::AnkiConnect;
pub use types::{
    DeckName,
    NewNote,
    NoteFields,
};

/// The AnkiConnect actions this client depends on.
pub trait NoteService {
    /// `deckNames`. `None` when the result is not a list.
    fn deck_names(&self) -> impl Future<Output = Result<Option<Vec<String>>, AnkiError>> + Send;

    /// `deckNamesAndIds`.
    fn deck_names_and_ids(
        &self,
    ) -> impl Future<Output = Result<HashMap<String, u64>, AnkiError>> + Send;

    /// `addNote`, returning the new note id.
    fn add_note(&self, note: &NewNote) -> impl Future<Output = Result<u64, AnkiError>> + Send;
}

/// Either shape a deck listing can arrive in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckListing {
    Names(Vec<String>),
    NamesAndIds(HashMap<String, u64>),
}

impl DeckListing {
    /// Mapping keys come out in whatever order the map yields them.
    pub fn into_deck_names(self) -> Vec<DeckName> {
        match self {
            DeckListing::Names(names) => names.into_iter().filter_map(DeckName::new).collect(),
            DeckListing::NamesAndIds(ids) => ids.into_keys().filter_map(DeckName::new).collect(),
        }
    }
}

pub async fn fetch_deck_listing<S: NoteService>(service: &S) -> Result<DeckListing, AnkiError> {
    match service.deck_names().await? {
        Some(names) if !names.is_empty() => Ok(DeckListing::Names(names)),
        Some(names) => {
            debug!("deckNames gave an empty list, trying deckNamesAndIds");
            match service.deck_names_and_ids().await {
                Ok(ids) => Ok(DeckListing::NamesAndIds(ids)),
                Err(e) => {
                    // The empty primary listing already succeeded; keep it.
                    warn!("deckNamesAndIds failed after an empty deckNames: {e}");
                    Ok(DeckListing::Names(names))
                }
            }
        }
        None => {
            debug!("deckNames gave no list, falling back to deckNamesAndIds");
            Ok(DeckListing::NamesAndIds(service.deck_names_and_ids().await?))
        }
    }
}

pub async fn load_decks<S: NoteService>(service: &S) -> Result<Vec<DeckName>, AnkiError> {
    let decks = fetch_deck_listing(service).await?.into_deck_names();
    info!(count = decks.len(), "Loaded deck names");
    Ok(decks)
}
