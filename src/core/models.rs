use crate::{
    anki::{
        DeckName,
        NewNote,
        NoteFields,
    },
    core::ValidationError,
};

pub const SELECT_DECK_PLACEHOLDER: &str = "Select a deck";
pub const NO_DECKS_FOUND: &str = "No decks found";

/// Splits on commas, trims each piece and drops the empty ones. Order and case are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|tag| !tag.is_empty()).map(str::to_string).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Neutral,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn neutral(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Neutral }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Error }
    }
}

/// One entry in the deck picker. Entries without a deck are placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOption {
    pub label: String,
    pub deck: Option<DeckName>,
}

impl DeckOption {
    pub fn placeholder(label: &str) -> Self {
        Self { label: label.to_string(), deck: None }
    }

    pub fn deck(deck: DeckName) -> Self {
        Self { label: deck.to_string(), deck: Some(deck) }
    }

    pub fn is_selectable(&self) -> bool {
        self.deck.is_some()
    }
}

pub fn deck_options(decks: &[DeckName]) -> Vec<DeckOption> {
    if decks.is_empty() {
        return vec![DeckOption::placeholder(NO_DECKS_FOUND)];
    }

    std::iter::once(DeckOption::placeholder(SELECT_DECK_PLACEHOLDER))
        .chain(decks.iter().cloned().map(DeckOption::deck))
        .collect()
}

/// The form exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    pub deck: Option<DeckName>,
    pub front: String,
    pub back: String,
    pub tags: String,
}

impl CardForm {
    pub fn draft(&self) -> CardDraft {
        CardDraft {
            deck_name: self
                .deck
                .as_ref()
                .map(|deck| deck.as_str().trim().to_string())
                .unwrap_or_default(),
            front: self.front.trim().to_string(),
            back: self.back.trim().to_string(),
            tags: parse_tags(&self.tags),
        }
    }

    /// Deck and tags stay so the next card can go straight into the same deck.
    pub fn clear_card_text(&mut self) {
        self.front.clear();
        self.back.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub deck_name: String,
    pub front: String,
    pub back: String,
    pub tags: Vec<String>,
}

impl CardDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.deck_name.is_empty() {
            return Err(ValidationError::MissingDeck);
        }
        if self.front.is_empty() || self.back.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }

    pub fn into_note(self, model_name: &str) -> Result<NewNote, ValidationError> {
        self.validate()?;

        Ok(NewNote {
            deck_name: self.deck_name,
            model_name: model_name.to_string(),
            fields: NoteFields { front: self.front, back: self.back },
            tags: self.tags,
        })
    }
}
