mod client;
mod store;
mod template;

pub use client::AnkiConnectClient;
pub use store::NoteStore;
pub use template::CardTemplate;

use anyhow::Result;
use hjanki_types::WordInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOutcome {
    Added,
    /// The store refused the note
    Rejected,
    /// A note with the same first field already exists
    Duplicate,
}

/// Add a card for `word` unless a note with the same expression exists
pub async fn add_card(
    store: &dyn NoteStore,
    template: &CardTemplate,
    word: &WordInfo,
) -> Result<CardOutcome> {
    let fields = template.fields(word);

    if !store.find_duplicates(&template.model, &fields[0]).await?.is_empty() {
        tracing::info!("Duplicate note for '{}'", fields[0]);
        return Ok(CardOutcome::Duplicate);
    }

    let model_id = store.resolve_model_id(&template.model).await?;
    let deck_id = store.resolve_deck_id(&template.deck).await?;

    if store.add_note(model_id, deck_id, &fields, &template.tags).await? {
        tracing::info!("Added note for '{}'", fields[0]);
        Ok(CardOutcome::Added)
    } else {
        Ok(CardOutcome::Rejected)
    }
}
