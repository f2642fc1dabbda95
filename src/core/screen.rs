use tracing::{
    debug,
    error,
    info,
    warn,
};

use super::{
    models::{
        deck_options,
        CardForm,
        DeckOption,
        StatusMessage,
    },
    AnkiError,
};
use crate::anki::{
    load_decks,
    DeckName,
    NewNote,
    NoteService,
};

pub const LOADING_DECKS: &str = "Loading decks...";
pub const READY: &str = "Ready.";
pub const ADDING_CARD: &str = "Adding card...";
pub const CARD_ADDED: &str = "Card added to deck successfully.";
pub const ADD_CARD_FAILED: &str = "Failed to add card.";
pub const LOAD_DECKS_FAILED: &str = "Failed to load decks.";

/// Everything the card window shows. Owned by whoever dispatches its events.
///
/// Each entry point is split into a `begin_*` step that updates the screen before the network
/// call and a `finish_*` step that applies the outcome, so a UI thread can hand the call off to
/// a worker in between. `on_activate` and `on_submit` run both halves inline.
#[derive(Debug)]
pub struct ScreenState {
    pub form: CardForm,
    deck_options: Vec<DeckOption>,
    status: StatusMessage,
    submit_enabled: bool,
    loading_decks: bool,
    model_name: String,
}

impl ScreenState {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            form: CardForm::default(),
            deck_options: Vec::new(),
            status: StatusMessage::default(),
            submit_enabled: true,
            loading_decks: false,
            model_name: model_name.into(),
        }
    }

    pub fn deck_options(&self) -> &[DeckOption] {
        &self.deck_options
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn is_loading_decks(&self) -> bool {
        self.loading_decks
    }

    pub fn is_busy(&self) -> bool {
        self.loading_decks || !self.submit_enabled
    }

    pub fn begin_activation(&mut self) {
        self.loading_decks = true;
        self.deck_options.clear();
        self.form.deck = None;
        self.status = StatusMessage::neutral(LOADING_DECKS);
    }

    pub fn finish_activation(&mut self, result: Result<Vec<DeckName>, AnkiError>) {
        self.loading_decks = false;

        match result {
            Ok(decks) => {
                self.deck_options = deck_options(&decks);
                self.status = StatusMessage::neutral(READY);
            }
            Err(e) => {
                error!("Failed to load decks: {e}");
                self.deck_options.clear();
                self.status = StatusMessage::error(
                    e.user_message().unwrap_or_else(|| LOAD_DECKS_FAILED.to_string()),
                );
            }
        }
    }

    pub async fn on_activate<S: NoteService>(&mut self, service: &S) {
        self.begin_activation();
        let result = load_decks(service).await;
        self.finish_activation(result);
    }

    /// Validates the form. Returns the note to send, or `None` when nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<NewNote> {
        if !self.submit_enabled {
            debug!("Ignoring submit while a card is being added");
            return None;
        }

        match self.form.draft().into_note(&self.model_name) {
            Ok(note) => {
                self.submit_enabled = false;
                self.status = StatusMessage::neutral(ADDING_CARD);
                Some(note)
            }
            Err(e) => {
                warn!("Card rejected: {e}");
                self.status = StatusMessage::error(e.to_string());
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<u64, AnkiError>) {
        match result {
            Ok(note_id) => {
                info!(note_id, "Card added");
                self.form.clear_card_text();
                self.status = StatusMessage::success(CARD_ADDED);
            }
            Err(e) => {
                error!("Failed to add card: {e}");
                self.status = StatusMessage::error(
                    e.user_message().unwrap_or_else(|| ADD_CARD_FAILED.to_string()),
                );
            }
        }

        self.submit_enabled = true;
    }

    pub async fn on_submit<S: NoteService>(&mut self, service: &S) {
        let Some(note) = self.begin_submit() else {
            return;
        };
        let result = service.add_note(&note).await;
        self.finish_submit(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        anki::{
            api::tests::closed_endpoint,
            fake::FakeService,
            AnkiConnect,
        },
        core::{
            models::{
                StatusKind,
                NO_DECKS_FOUND,
                SELECT_DECK_PLACEHOLDER,
            },
            ClientConfig,
            CONNECTIVITY_HINT,
        },
    };

    fn deck(name: &str) -> DeckName {
        DeckName::new(name).unwrap()
    }

    fn filled_screen() -> ScreenState {
        let mut screen = ScreenState::new("Basic");
        screen.form = CardForm {
            deck: Some(deck("Spanish")),
            front: "hola".to_string(),
            back: "hello".to_string(),
            tags: "greeting, common".to_string(),
        };
        screen
    }

    #[tokio::test]
    async fn activation_lists_decks_after_placeholder() {
        let service = FakeService::with_decks(&["Spanish", "Default"]);
        let mut screen = ScreenState::new("Basic");

        screen.on_activate(&service).await;

        let labels: Vec<&str> = screen.deck_options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec![SELECT_DECK_PLACEHOLDER, "Spanish", "Default"]);
        assert_eq!(screen.form.deck, None);
        assert_eq!(screen.status(), &StatusMessage::neutral(READY));
        assert!(!screen.is_loading_decks());
    }

    #[tokio::test]
    async fn activation_with_no_decks_shows_placeholder_only() {
        let service = FakeService { deck_names: Ok(None), ..FakeService::default() };
        let mut screen = ScreenState::new("Basic");

        screen.on_activate(&service).await;

        assert_eq!(screen.deck_options().len(), 1);
        assert_eq!(screen.deck_options()[0].label, NO_DECKS_FOUND);
        assert!(screen.deck_options()[0].deck.is_none());
    }

    #[tokio::test]
    async fn empty_listing_with_failed_fallback_shows_no_decks_found() {
        let service = FakeService {
            deck_names: Ok(Some(vec![])),
            deck_names_and_ids: Err(AnkiError::Service("unsupported action".to_string())),
            ..FakeService::default()
        };
        let mut screen = ScreenState::new("Basic");

        screen.on_activate(&service).await;

        assert_eq!(screen.deck_options().len(), 1);
        assert_eq!(screen.deck_options()[0].label, NO_DECKS_FOUND);
        assert!(screen.deck_options()[0].deck.is_none());
        assert_eq!(screen.status(), &StatusMessage::neutral(READY));
    }

    #[tokio::test]
    async fn activation_failure_leaves_no_options() {
        let service = FakeService {
            deck_names: Err(AnkiError::Transport { status: 502, reason: "Bad Gateway".to_string() }),
            ..FakeService::default()
        };
        let mut screen = ScreenState::new("Basic");

        screen.on_activate(&service).await;

        assert!(screen.deck_options().is_empty());
        assert_eq!(screen.status().kind, StatusKind::Error);
        assert!(screen.status().text.contains("502"));
        assert!(screen.submit_enabled());
    }

    #[test]
    fn begin_activation_shows_loading() {
        let mut screen = ScreenState::new("Basic");

        screen.begin_activation();

        assert!(screen.is_loading_decks());
        assert_eq!(screen.status(), &StatusMessage::neutral(LOADING_DECKS));
    }

    #[tokio::test]
    async fn submit_without_deck_never_calls_out() {
        let service = FakeService::default();
        let mut screen = filled_screen();
        screen.form.deck = None;

        screen.on_submit(&service).await;

        assert_eq!(screen.status(), &StatusMessage::error("Please select a deck."));
        assert!(service.calls().is_empty());
        assert!(screen.submit_enabled());
    }

    #[tokio::test]
    async fn submit_without_front_or_back_never_calls_out() {
        let service = FakeService::default();

        let mut screen = filled_screen();
        screen.form.front = "  ".to_string();
        screen.on_submit(&service).await;
        assert_eq!(screen.status(), &StatusMessage::error("Front and Back are required."));

        let mut screen = filled_screen();
        screen.form.back.clear();
        screen.on_submit(&service).await;
        assert_eq!(screen.status(), &StatusMessage::error("Front and Back are required."));

        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn submit_sends_basic_note() {
        let service = FakeService::default();
        let mut screen = filled_screen();

        screen.on_submit(&service).await;

        let notes = service.notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].deck_name, "Spanish");
        assert_eq!(notes[0].model_name, "Basic");
        assert_eq!(notes[0].fields.front, "hola");
        assert_eq!(notes[0].fields.back, "hello");
        assert_eq!(notes[0].tags, vec!["greeting", "common"]);
    }

    #[tokio::test]
    async fn success_clears_card_text_only() {
        let service = FakeService::default();
        let mut screen = filled_screen();

        screen.on_submit(&service).await;

        assert!(screen.form.front.is_empty());
        assert!(screen.form.back.is_empty());
        assert_eq!(screen.form.deck, Some(deck("Spanish")));
        assert_eq!(screen.form.tags, "greeting, common");
        assert_eq!(screen.status(), &StatusMessage::success(CARD_ADDED));
        assert!(screen.submit_enabled());
    }

    #[tokio::test]
    async fn service_error_text_reaches_status() {
        let service = FakeService {
            add_note: Err(AnkiError::Service("deck was missing".to_string())),
            ..FakeService::default()
        };
        let mut screen = filled_screen();

        screen.on_submit(&service).await;

        assert_eq!(screen.status().kind, StatusKind::Error);
        assert!(screen.status().text.contains("deck was missing"));
        assert_eq!(screen.form.front, "hola");
        assert!(screen.submit_enabled());
    }

    #[tokio::test]
    async fn empty_result_uses_generic_message() {
        let service =
            FakeService { add_note: Err(AnkiError::EmptyResult), ..FakeService::default() };
        let mut screen = filled_screen();

        screen.on_submit(&service).await;

        assert_eq!(screen.status(), &StatusMessage::error(ADD_CARD_FAILED));
    }

    #[tokio::test]
    async fn unreachable_anki_reports_connectivity_and_reenables_submit() {
        let config = ClientConfig { endpoint: closed_endpoint().await, ..ClientConfig::default() };
        let service = AnkiConnect::new(&config).unwrap();
        let mut screen = filled_screen();

        screen.on_submit(&service).await;

        assert_eq!(screen.status(), &StatusMessage::error(CONNECTIVITY_HINT));
        assert!(screen.submit_enabled());
        assert_eq!(screen.form.front, "hola");
    }

    #[test]
    fn submit_is_ignored_while_in_flight() {
        let mut screen = filled_screen();

        assert!(screen.begin_submit().is_some());
        assert!(!screen.submit_enabled());
        assert_eq!(screen.status(), &StatusMessage::neutral(ADDING_CARD));

        assert!(screen.begin_submit().is_none());

        screen.finish_submit(Ok(42));
        assert!(screen.submit_enabled());
    }
}
