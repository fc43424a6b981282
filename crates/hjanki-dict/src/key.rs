use std::fmt;

use unicode_normalization::UnicodeNormalization;

use crate::error::DictError;

/// Trim, NFKC-normalize and drop line breaks
fn normalize(text: &str) -> String {
    let text = text.trim();

    if text.is_empty() {
        return String::new();
    }

    let text: String = text.nfkc().collect();

    text.replace(['\n', '\r'], "").trim().to_string()
}

/// Normalized expression addressing the lookup page and its cache entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey(String);

impl LookupKey {
    pub fn new(expression: &str) -> Result<Self, DictError> {
        let processed = normalize(expression);
        if processed.is_empty() {
            return Err(DictError::EmptyKey);
        }
        Ok(Self(processed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
