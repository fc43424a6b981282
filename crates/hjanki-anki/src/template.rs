use hjanki_dict::{detailed_senses_markup, short_senses_markup, sound_markup};
use hjanki_types::WordInfo;
use serde::{Deserialize, Serialize};

/// Where and how dictionary notes are stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTemplate {
    pub deck: String,
    pub model: String,
    pub tags: Vec<String>,
}

impl CardTemplate {
    /// Create default Japanese dictionary template
    pub fn default_japanese() -> Self {
        Self {
            deck: "Japanese_Word".to_string(),
            model: "japanese(dict)".to_string(),
            tags: vec!["japanese(dict)".to_string()],
        }
    }

    pub fn new(deck: String, model: String, tags: Vec<String>) -> Self {
        Self { deck, model, tags }
    }

    /// Field values in the note type's order.
    ///
    /// Entries without short senses get them derived from the detailed senses.
    pub fn fields(&self, word: &WordInfo) -> Vec<String> {
        vec![
            word.expression.clone(),
            word.pronunciation.clone(),
            word.secondary_pronunciation.clone(),
            word.tone_marker.clone(),
            sound_markup(&word.audio_ref),
            short_senses_markup(&word.short_senses_or_derived()),
            detailed_senses_markup(&word.detailed_senses),
        ]
    }
}
