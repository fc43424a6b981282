use std::sync::Arc;
use std::time::Duration;

use hjanki_types::{HomographCandidate, WordInfo};
use tokio::sync::Mutex;

use crate::cache::{DocumentCache, RawDocument};
use crate::classify::{PageKind, classify};
use crate::error::DictError;
use crate::key::LookupKey;
use crate::parse::parse_entry;
use crate::resolve::resolve;
use crate::transport::Transport;

/// Result of a lookup that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Entry(WordInfo),
    /// The key is unknown; the site suggests these expressions
    Suggestions(Vec<String>),
    /// Pick one and look up again with its pronunciation
    Homographs(Vec<HomographCandidate>),
}

/// Dictionary lookup pipeline for one session.
///
/// The page cache is locked for the whole run, so overlapping lookups on the
/// same service are serialized.
pub struct DictService<T: Transport> {
    transport: T,
    cache: Mutex<DocumentCache>,
    timeout: Option<Duration>,
}

impl<T: Transport> DictService<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cache: Mutex::new(DocumentCache::new()),
            timeout: None,
        }
    }

    /// Fail fetches that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Page for `key`, reusing the cached one when the key matches
    pub async fn fetch(&self, key: &LookupKey) -> Result<Arc<RawDocument>, DictError> {
        let mut cache = self.cache.lock().await;
        self.fetch_with(&mut cache, key).await
    }

    /// Look up `expression`, optionally narrowed to one homograph by `pronunciation`.
    ///
    /// The normalized key only addresses the page; entries are matched
    /// against the expression as the caller wrote it.
    pub async fn get_dict(
        &self,
        expression: &str,
        pronunciation: Option<&str>,
    ) -> Result<Lookup, DictError> {
        let key = LookupKey::new(expression)?;

        let mut cache = self.cache.lock().await;
        let doc = self.fetch_with(&mut cache, &key).await?;

        analyze(&doc, expression.trim(), pronunciation)
    }

    async fn fetch_with(
        &self,
        cache: &mut DocumentCache,
        key: &LookupKey,
    ) -> Result<Arc<RawDocument>, DictError> {
        if let Some(doc) = cache.get(key) {
            tracing::debug!("Reusing cached page for '{}'", key);
            return Ok(doc);
        }

        let request = self.transport.get(key);
        let body = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, request)
                .await
                .map_err(|_| DictError::Timeout(timeout))??,
            None => request.await?,
        };

        tracing::debug!("Fetched page for '{}' ({} bytes)", key, body.len());
        Ok(cache.store(RawDocument::new(key.clone(), body)))
    }
}

/// Classify, resolve and parse a fetched page
pub fn analyze(
    doc: &RawDocument,
    expression: &str,
    pronunciation: Option<&str>,
) -> Result<Lookup, DictError> {
    let html = doc.parse();

    match classify(&html, pronunciation) {
        PageKind::NotFound => {
            tracing::debug!("'{}' not found", expression);
            Err(DictError::NotFound)
        }
        PageKind::Suggestions(suggestions) => {
            tracing::debug!("'{}': {} suggestions", expression, suggestions.len());
            Ok(Lookup::Suggestions(suggestions))
        }
        PageKind::AmbiguousHomographs(candidates) => {
            tracing::debug!("'{}': {} homographs", expression, candidates.len());
            Ok(Lookup::Homographs(candidates))
        }
        PageKind::Resolved => {
            let block = resolve(&html, expression, pronunciation)?;
            Ok(Lookup::Entry(parse_entry(block)?))
        }
    }
}
