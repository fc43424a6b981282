use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/69.0.3497.81 Safari/537.36";

/// Session cookies the site expects from a browser. Not credentials.
const COOKIES: [(&str, &str); 9] = [
    ("HJ_UID", "0f406091-be97-6b64-f1fc-f7b2470883e9"),
    ("HJ_CST", "1"),
    ("HJ_CSST_3", "1"),
    ("TRACKSITEMAP", "3%2C"),
    ("HJ_SID", "393c85c7-abac-f408-6a32-a1f125d7e8c6"),
    ("_REF", ""),
    ("HJ_SSID_3", "4a460f19-c0ae-12a7-8e86-6e360f69ec9b"),
    ("_SREF_3", ""),
    ("HJ_CMATCH", "1"),
];

fn default_timeout_seconds() -> u64 {
    30
}

/// Remote dictionary endpoint settings
#[derive(Clone, Serialize, Deserialize)]
pub struct DictConfig {
    pub base_url: String,
    /// Path between the base URL and the expression, e.g. `jp/jc` for Japanese-Chinese
    pub lookup_path: String,
    pub user_agent: String,
    pub cookies: Vec<(String, String)>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl DictConfig {
    pub fn new() -> Self {
        Self {
            base_url: env::var("HJ_BASE_URL").unwrap_or_else(|_| "http://www.hjdict.com".to_string()),
            lookup_path: env::var("HJ_LOOKUP_PATH").unwrap_or_else(|_| "jp/jc".to_string()),
            user_agent: USER_AGENT.to_string(),
            cookies: COOKIES
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            timeout_seconds: env_or("HJ_TIMEOUT_SECONDS", default_timeout_seconds()),
        }
    }

    /// URL prefix every lookup is appended to
    pub fn lookup_base(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.lookup_path.trim_matches('/')
        )
    }

    /// Value of the `Cookie` request header
    pub fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for DictConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DictConfig {
        DictConfig {
            base_url: "http://www.hjdict.com/".to_string(),
            lookup_path: "/jp/jc/".to_string(),
            user_agent: USER_AGENT.to_string(),
            cookies: vec![
                ("HJ_UID".to_string(), "abc".to_string()),
                ("_REF".to_string(), "".to_string()),
            ],
            timeout_seconds: 5,
        }
    }

    #[test]
    fn test_lookup_base_trims_slashes() {
        assert_eq!(config().lookup_base(), "http://www.hjdict.com/jp/jc");
    }

    #[test]
    fn test_cookie_header() {
        assert_eq!(config().cookie_header(), "HJ_UID=abc; _REF=");
    }

    #[test]
    fn test_missing_timeout_uses_default() {
        let json = serde_json::json!({
            "base_url": "http://localhost",
            "lookup_path": "jp/jc",
            "user_agent": "test",
            "cookies": [],
        });
        let config: DictConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
