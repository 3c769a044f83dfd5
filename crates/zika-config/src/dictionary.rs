use std::str::FromStr;

use serde::{Deserialize, Serialize};

fn default_source() -> String {
    "zdic".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_concurrency() -> usize {
    1
}

fn default_user_agent() -> String {
    concat!("zika/", env!("CARGO_PKG_VERSION")).to_string()
}

/// What the character pipeline does when a dictionary page cannot be fetched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchErrorPolicy {
    /// Stop the run at the failing entry
    #[default]
    Abort,
    /// Log the failure, write the row with empty dictionary fields and go on
    Skip,
}

impl FromStr for FetchErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unknown fetch error policy: {other}")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary source id (`zdic` or `baidu`)
    #[serde(default = "default_source")]
    pub source: String,
    /// Alternate page base URL, e.g. a mirror
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Max dictionary lookups in flight
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub on_fetch_error: FetchErrorPolicy,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            base_url: None,
            timeout_seconds: default_timeout_seconds(),
            concurrency: default_concurrency(),
            user_agent: default_user_agent(),
            on_fetch_error: FetchErrorPolicy::default(),
        }
    }
}

impl DictionaryConfig {
    pub(crate) fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let source = lookup("ZIKA_SOURCE").unwrap_or_else(default_source);

        let base_url = lookup("ZIKA_BASE_URL").filter(|v| !v.trim().is_empty());

        let timeout_seconds = lookup("ZIKA_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let concurrency = lookup("ZIKA_CONCURRENCY")
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or_else(default_concurrency);

        let user_agent = lookup("ZIKA_USER_AGENT").unwrap_or_else(default_user_agent);

        let on_fetch_error = lookup("ZIKA_ON_FETCH_ERROR")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            source,
            base_url,
            timeout_seconds,
            concurrency,
            user_agent,
            on_fetch_error,
        }
    }
}
