use std::io::Write;

use hjanki_dict::{DictError, Lookup, Transport};
use hjanki_types::{HomographCandidate, WordInfo};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{describe, handle_card_creation, lookup_word};
use crate::state::AppState;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Empty,
    Quit,
    Add,
    Help,
    /// 1-based index into the pending choices
    Pick(usize),
    Lookup(String),
}

/// Choices the last lookup asked the user to make
#[derive(Debug, Default)]
pub enum Pending {
    #[default]
    Nothing,
    Suggestions(Vec<String>),
    Homographs(Vec<HomographCandidate>),
}

impl Pending {
    fn len(&self) -> usize {
        match self {
            Pending::Nothing => 0,
            Pending::Suggestions(s) => s.len(),
            Pending::Homographs(c) => c.len(),
        }
    }
}

/// Numbers only pick a choice while choices are pending; otherwise they are looked up
pub fn parse_command(line: &str, pending: &Pending) -> Command {
    let line = line.trim();
    match line {
        "" => Command::Empty,
        ":q" | ":quit" => Command::Quit,
        ":a" | ":add" => Command::Add,
        ":h" | ":help" => Command::Help,
        _ => match line.parse::<usize>() {
            Ok(n) if n >= 1 && n <= pending.len() => Command::Pick(n),
            _ => Command::Lookup(line.to_string()),
        },
    }
}

/// The (expression, pronunciation) query a picked choice stands for
pub fn choice_query(pending: &Pending, n: usize) -> Option<(String, Option<String>)> {
    let i = n.checked_sub(1)?;
    match pending {
        Pending::Nothing => None,
        Pending::Suggestions(s) => s.get(i).map(|e| (e.clone(), None)),
        Pending::Homographs(c) => c
            .get(i)
            .map(|c| (c.expression.clone(), Some(c.pronunciation.clone()))),
    }
}

const HELP: &str = "Type a word to look it up.\n\
                    <n>    pick a suggestion or pronunciation\n\
                    :a     add the current entry to Anki\n\
                    :q     quit\n";

/// Prompt loop over one session. Lookups run one at a time, so the
/// session's page cache is never raced.
pub async fn run_interactive<T: Transport>(state: &AppState<T>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = Pending::Nothing;
    let mut current: Option<WordInfo> = None;

    print!("{HELP}");
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let (expression, pronunciation) = match parse_command(&line, &pending) {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Help => {
                print!("{HELP}");
                continue;
            }
            Command::Add => {
                match &current {
                    Some(word) => {
                        if let Err(e) = handle_card_creation(state, word).await {
                            tracing::error!("Failed to add card: {e:#}");
                            println!("Failed to add card: {e:#}");
                        }
                    }
                    None => println!("Nothing to add, look up a word first"),
                }
                continue;
            }
            Command::Pick(n) => match choice_query(&pending, n) {
                Some(query) => query,
                None => continue,
            },
            Command::Lookup(expression) => (expression, None),
        };

        pending = Pending::Nothing;
        match lookup_word(&state.dict, &expression, pronunciation.as_deref()).await {
            Ok(lookup) => {
                print!("{}", describe(&lookup));
                match lookup {
                    Lookup::Entry(word) => current = Some(word),
                    Lookup::Suggestions(s) => pending = Pending::Suggestions(s),
                    Lookup::Homographs(c) => pending = Pending::Homographs(c),
                }
            }
            Err(DictError::NotFound) => println!("Not found"),
            Err(e) => {
                tracing::error!("Lookup of '{}' failed: {}", expression, e);
                println!("{e}");
            }
        }
    }

    Ok(())
}
