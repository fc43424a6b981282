use clap::{Parser, Subcommand};
use hjanki_config::Config;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod state;


use self::state::AppState;

#[derive(Parser)]
#[command(name = "hjanki", about = "Look up Japanese words on hjdict and turn them into Anki notes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a word and print the entry, suggestions or homographs
    Lookup {
        expression: String,
        /// Pronunciation picking one of several homographs
        #[arg(short, long)]
        pronunciation: Option<String>,
    },
    /// Look up a word and add it to Anki
    Add {
        expression: String,
        #[arg(short, long)]
        pronunciation: Option<String>,
        /// Deck to add to (default from config)
        #[arg(long)]
        deck: Option<String>,
        /// Note type to use (default from config)
        #[arg(long)]
        model: Option<String>,
    },
    /// Prompt loop: look up, pick choices by number, add with :a
    Interactive,
    /// Print the effective configuration as JSON
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = Config::new();
    init_tracing(config.json_logs);

    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup {
            expression,
            pronunciation,
        } => {
            let state = AppState::new(config)?;
            commands::handle_lookup(&state, &expression, pronunciation.as_deref()).await?;
        }
        Commands::Add {
            expression,
            pronunciation,
            deck,
            model,
        } => {
            if let Some(deck) = deck {
                config.anki.deck = deck;
            }
            if let Some(model) = model {
                config.anki.model = model;
            }
            let state = AppState::new(config)?;
            if let Some(word) =
                commands::handle_lookup(&state, &expression, pronunciation.as_deref()).await?
            {
                commands::handle_card_creation(&state, &word).await?;
            }
        }
        Commands::Interactive => {
            let state = AppState::new(config)?;
            if let Some(client) = &state.anki {
                match client.check_connection().await {
                    Ok(version) => tracing::info!("AnkiConnect version {}", version),
                    Err(e) => tracing::warn!("AnkiConnect unavailable: {e:#}"),
                }
            }
            commands::run_interactive(&state).await?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout only carries lookup output
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
