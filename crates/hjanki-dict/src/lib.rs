pub mod cache;
pub mod classify;
mod dom;
pub mod error;
pub mod format;
pub mod key;
pub mod parse;
pub mod resolve;
pub mod service;
pub mod transport;

#[cfg(test)]
mod tests;

pub use cache::{DocumentCache, RawDocument};
pub use classify::{PageKind, classify};
pub use error::DictError;
pub use format::{detailed_senses_markup, render_preview, short_senses_markup, sound_markup};
pub use key::LookupKey;
pub use parse::parse_entry;
pub use resolve::resolve;
pub use service::{DictService, Lookup, analyze};
pub use transport::{HttpTransport, Transport};
