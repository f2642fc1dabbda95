use serde::{
    Deserialize,
    Serialize,
};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8765/";
pub const DEFAULT_API_VERSION: u8 = 6;
pub const DEFAULT_MODEL_NAME: &str = "Basic";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_version: u8,
    /// Note type used for every card. Must have `Front` and `Back` fields.
    pub model_name: String,
    pub window_title: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            window_title: "Anki Card".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "endpoint": "http://127.0.0.1:9000/" }"#).unwrap();

        assert_eq!(config.endpoint, "http://127.0.0.1:9000/");
        assert_eq!(config.api_version, 6);
        assert_eq!(config.model_name, "Basic");
    }
}
