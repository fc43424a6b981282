use hjanki_anki::CardOutcome;
use hjanki_dict::Transport;
use hjanki_types::WordInfo;

use crate::state::AppState;

pub async fn handle_card_creation<T: Transport>(
    state: &AppState<T>,
    word: &WordInfo,
) -> anyhow::Result<()> {
    let Some(client) = &state.anki else {
        tracing::warn!("Anki integration disabled");
        return Ok(());
    };

    match hjanki_anki::add_card(client, &state.card_template(), word).await? {
        CardOutcome::Added => println!("Added '{}'", word.expression),
        CardOutcome::Duplicate => println!("Can not add '{}': duplicate", word.expression),
        CardOutcome::Rejected => println!("Anki refused the note for '{}'", word.expression),
    }

    Ok(())
}
