use std::sync::Arc;

use scraper::Html;

use crate::key::LookupKey;

/// Lookup page source fetched for one key
#[derive(Debug)]
pub struct RawDocument {
    key: LookupKey,
    body: String,
}

impl RawDocument {
    pub fn new(key: LookupKey, body: String) -> Self {
        Self { key, body }
    }

    pub fn key(&self) -> &LookupKey {
        &self.key
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parse the page. The DOM is not `Send`, so it is rebuilt per run
    /// instead of being held across awaits.
    pub fn parse(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// Holds the most recently fetched page of a session
#[derive(Debug, Default)]
pub struct DocumentCache {
    last: Option<Arc<RawDocument>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached page for `key`, if it is the last one fetched
    pub fn get(&self, key: &LookupKey) -> Option<Arc<RawDocument>> {
        self.last.as_ref().filter(|doc| doc.key() == key).cloned()
    }

    /// Replace the cached page
    pub fn store(&mut self, doc: RawDocument) -> Arc<RawDocument> {
        let doc = Arc::new(doc);
        self.last = Some(Arc::clone(&doc));
        doc
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
