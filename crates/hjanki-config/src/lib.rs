use std::env;

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::dict::DictConfig;

pub mod anki;
pub mod dict;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub dict: DictConfig,
    pub anki: AnkiConfig,

    /// Emit logs as JSON lines instead of the human-readable format
    pub json_logs: bool,
}

impl Config {
    pub fn new() -> Self {
        let json_logs = env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Config {
            dict: DictConfig::new(),
            anki: AnkiConfig::new(),
            json_logs,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Read an environment variable and parse it, falling back on absence or parse failure
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
