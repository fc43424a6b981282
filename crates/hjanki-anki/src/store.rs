use anyhow::Result;
use async_trait::async_trait;

/// Flashcard store operations needed to add dictionary notes
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Ids of notes of `model_name` whose first field equals `first_field`
    async fn find_duplicates(&self, model_name: &str, first_field: &str) -> Result<Vec<u64>>;

    /// Id of the note type named `name`; fails if there is none
    async fn resolve_model_id(&self, name: &str) -> Result<u64>;

    /// Id of the deck named `name`; fails if there is none
    async fn resolve_deck_id(&self, name: &str) -> Result<u64>;

    /// Add a note with field values in the note type's field order
    async fn add_note(
        &self,
        model_id: u64,
        deck_id: u64,
        fields: &[String],
        tags: &[String],
    ) -> Result<bool>;
}
