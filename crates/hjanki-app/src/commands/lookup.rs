use std::fmt::Write;

use hjanki_dict::{DictError, DictService, Lookup, Transport, render_preview};
use hjanki_types::WordInfo;

use crate::state::AppState;

/// Look up an expression; a chosen homograph that keeps the query's spelling
/// gets its pronunciation folded into the expression.
pub async fn lookup_word<T: Transport>(
    dict: &DictService<T>,
    expression: &str,
    pronunciation: Option<&str>,
) -> Result<Lookup, DictError> {
    let mut lookup = dict.get_dict(expression, pronunciation).await?;

    if let (Some(_), Lookup::Entry(word)) = (pronunciation, &mut lookup) {
        if word.expression == expression.trim() {
            word.fold_pronunciation();
        }
    }

    Ok(lookup)
}

/// Text shown to the user for a lookup result
pub fn describe(lookup: &Lookup) -> String {
    match lookup {
        Lookup::Entry(word) => render_preview(word),
        Lookup::Suggestions(suggestions) => {
            let mut out = String::from("Did you mean:\n");
            for (i, suggestion) in suggestions.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, suggestion);
            }
            out
        }
        Lookup::Homographs(candidates) => {
            let mut out = String::from("Several entries, pick a pronunciation:\n");
            for (i, candidate) in candidates.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {}. {} {}",
                    i + 1,
                    candidate.expression,
                    candidate.pronunciation
                );
            }
            out
        }
    }
}

/// Print the lookup result; returns the entry when one was resolved
pub async fn handle_lookup<T: Transport>(
    state: &AppState<T>,
    expression: &str,
    pronunciation: Option<&str>,
) -> anyhow::Result<Option<WordInfo>> {
    match lookup_word(&state.dict, expression, pronunciation).await {
        Ok(lookup) => {
            print!("{}", describe(&lookup));
            match lookup {
                Lookup::Entry(word) => Ok(Some(word)),
                _ => Ok(None),
            }
        }
        Err(DictError::NotFound) => {
            println!("Not found");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
