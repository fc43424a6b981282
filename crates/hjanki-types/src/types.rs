use serde::{Deserialize, Serialize};

/// One dictionary entry as extracted from a lookup page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInfo {
    pub expression: String,
    pub pronunciation: String,
    /// Kana-equivalent reading
    pub secondary_pronunciation: String,
    pub tone_marker: String,
    pub audio_ref: String,
    pub short_senses: Vec<ShortSense>,
    pub detailed_senses: Vec<DetailedSense>,
}

impl WordInfo {
    /// Append the pronunciation to the display expression.
    ///
    /// Used after a homograph was picked so the note's first field stays
    /// unique between entries that share a spelling.
    pub fn fold_pronunciation(&mut self) {
        self.expression.push_str(&self.pronunciation);
    }

    /// Short senses, or ones derived from the detailed senses when the page had none
    pub fn short_senses_or_derived(&self) -> Vec<ShortSense> {
        if !self.short_senses.is_empty() {
            return self.short_senses.clone();
        }

        self.detailed_senses
            .iter()
            .map(|sense| ShortSense {
                part_of_speech: sense.part_of_speech.clone(),
                meanings: sense
                    .entries
                    .iter()
                    .map(|entry| entry.target_meaning.clone())
                    .collect(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortSense {
    pub part_of_speech: String,
    pub meanings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedSense {
    pub part_of_speech: String,
    pub entries: Vec<SenseEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseEntry {
    pub source_meaning: String,
    pub target_meaning: String,
    pub examples: Vec<ExampleSentence>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub source_text: String,
    pub target_text: String,
    pub audio_ref: String,
}

/// Same-spelling entry told apart by its pronunciation
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HomographCandidate {
    pub expression: String,
    pub pronunciation: String,
}
