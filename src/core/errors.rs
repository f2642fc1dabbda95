use std::error::Error as _;

use thiserror::Error;

pub const CONNECTIVITY_HINT: &str = "Cannot connect to Anki. Make sure Anki is running and the AnkiConnect add-on is installed and enabled.";

/// Failures talking to AnkiConnect, one variant per layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnkiError {
    #[error("Cannot connect to AnkiConnect at {endpoint}: {reason}")]
    Connectivity { endpoint: String, reason: String },

    #[error("HTTP error {status} {reason}")]
    Transport { status: u16, reason: String },

    #[error("AnkiConnect error: {0}")]
    Service(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected response from AnkiConnect: {0}")]
    Decode(String),

    #[error("AnkiConnect returned an empty result")]
    EmptyResult,
}

impl AnkiError {
    pub(crate) fn from_send(endpoint: &str, error: reqwest::Error) -> Self {
        let reason = error_chain(&error);
        if error.is_connect() || error.is_timeout() {
            AnkiError::Connectivity { endpoint: endpoint.to_string(), reason }
        } else {
            AnkiError::Request(reason)
        }
    }

    /// Text safe to put in front of the user, or `None` when the caller's generic message fits better.
    pub fn user_message(&self) -> Option<String> {
        match self {
            AnkiError::Connectivity { .. } => Some(CONNECTIVITY_HINT.to_string()),
            AnkiError::Transport { status, reason } => {
                Some(format!("Anki responded with HTTP {status} {reason}."))
            }
            AnkiError::Service(text) => Some(text.clone()),
            AnkiError::Request(_) => Some("The request to Anki could not be completed.".to_string()),
            AnkiError::Decode(_) | AnkiError::EmptyResult => None,
        }
    }
}

fn error_chain(error: &reqwest::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// Local checks that run before anything is sent. `Display` is the exact status text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a deck.")]
    MissingDeck,

    #[error("Front and Back are required.")]
    MissingFields,
}

#[derive(Error, Debug)]
pub enum CardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client build failed: {0}")]
    HttpClient(Box<reqwest::Error>),
}

impl From<reqwest::Error> for CardError {
    fn from(error: reqwest::Error) -> Self {
        CardError::HttpClient(Box::new(error))
    }
}
