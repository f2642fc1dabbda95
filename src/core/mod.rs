pub mod config;
pub mod errors;
pub mod models;
pub mod screen;
pub mod tasks;

pub use config::ClientConfig;
pub use errors::{
    AnkiError,
    CardError,
    ValidationError,
    CONNECTIVITY_HINT,
};
pub use models::{
    parse_tags,
    CardDraft,
    CardForm,
    DeckOption,
    StatusKind,
    StatusMessage,
};
pub use screen::ScreenState;
