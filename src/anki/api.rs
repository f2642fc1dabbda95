use std::collections::HashMap;

use reqwest::Client;
use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize,
};
use serde_json::Value;
use tracing::debug;

use super::{
    types::NewNote,
    NoteService,
};
use crate::core::{
    AnkiError,
    CardError,
    ClientConfig,
};

#[derive(Debug, Serialize)]
struct ActionRequest<'a, P> {
    action: &'a str,
    version: u8,
    params: P,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A non-null `error` wins over whatever `result` holds.
    pub fn into_result(self) -> Result<Option<T>, AnkiError> {
        match self.error {
            Some(error) => Err(AnkiError::Service(error)),
            None => Ok(self.result),
        }
    }
}

/// Client for the AnkiConnect add-on's HTTP endpoint.
#[derive(Debug, Clone)]
pub struct AnkiConnect {
    client: Client,
    endpoint: String,
    version: u8,
}

impl AnkiConnect {
    pub fn new(config: &ClientConfig) -> Result<Self, CardError> {
        // AnkiConnect only listens locally; never route through a system proxy.
        let client = Client::builder().no_proxy().build()?;

        Ok(Self { client, endpoint: config.endpoint.clone(), version: config.api_version })
    }

    async fn make_request<P: Serialize, T: DeserializeOwned>(
        &self,
        action: &str,
        params: P,
    ) -> Result<ApiResponse<T>, AnkiError> {
        debug!(action, endpoint = %self.endpoint, "AnkiConnect request");

        let body = ActionRequest { action, version: self.version, params };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnkiError::from_send(&self.endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnkiError::Transport {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response.json::<ApiResponse<T>>().await.map_err(|e| AnkiError::Decode(e.to_string()))
    }
}

impl NoteService for AnkiConnect {
    async fn deck_names(&self) -> Result<Option<Vec<String>>, AnkiError> {
        let response: ApiResponse<Value> =
            self.make_request("deckNames", serde_json::json!({})).await?;

        Ok(match response.into_result()? {
            Some(Value::Array(items)) => Some(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(name) => Some(name),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        })
    }

    async fn deck_names_and_ids(&self) -> Result<HashMap<String, u64>, AnkiError> {
        let response: ApiResponse<HashMap<String, u64>> =
            self.make_request("deckNamesAndIds", serde_json::json!({})).await?;

        Ok(response.into_result()?.unwrap_or_default())
    }

    async fn add_note(&self, note: &NewNote) -> Result<u64, AnkiError> {
        let params = serde_json::json!({ "note": note });
        let response: ApiResponse<u64> = self.make_request("addNote", params).await?;

        response.into_result()?.ok_or(AnkiError::EmptyResult)
    }
}
