use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    /// The page has no entry for the key, or no entry matches the chosen pronunciation
    #[error("Not found")]
    NotFound,

    /// The page does not have the shape the parser relies on
    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Empty lookup key")]
    EmptyKey,

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl DictError {
    pub(crate) fn format(what: impl Into<String>) -> Self {
        DictError::Format(what.into())
    }

    /// Network-side failures, as opposed to page content problems
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DictError::Transport(_) | DictError::Status(_) | DictError::Timeout(_)
        )
    }
}
