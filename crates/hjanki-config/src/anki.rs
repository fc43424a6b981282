use std::env;

use serde::{Deserialize, Serialize};

use crate::env_or;

#[derive(Clone, Serialize, Deserialize)]
pub struct AnkiConfig {
    /// Enable Anki integration
    pub enabled: bool,
    /// AnkiConnect URL
    pub url: String,
    /// Deck new notes are added to
    pub deck: String,
    /// Note type with the seven dictionary fields
    pub model: String,
    pub tags: Vec<String>,
}

impl AnkiConfig {
    pub fn new() -> Self {
        let model = env::var("ANKI_MODEL").unwrap_or_else(|_| "japanese(dict)".to_string());

        Self {
            enabled: env_or("ANKI_ENABLED", true),
            url: env::var("ANKI_CONNECT_URL")
                .unwrap_or_else(|_| "http://localhost:8765".to_string()),
            deck: env::var("ANKI_DECK").unwrap_or_else(|_| "Japanese_Word".to_string()),
            tags: vec![model.clone()],
            model,
        }
    }
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self::new()
    }
}
