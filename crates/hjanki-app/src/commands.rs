pub mod create_card;
pub mod interactive;
pub mod lookup;

pub use create_card::handle_card_creation;
pub use interactive::run_interactive;
pub use lookup::{describe, handle_lookup, lookup_word};
