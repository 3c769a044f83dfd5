/// Problems found while setting up a dictionary source, before any request is made
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown dictionary source: {id} (expected one of: {known})")]
    UnknownSource { id: String, known: String },

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Network { url, .. } | FetchError::Status { url, .. } => url,
        }
    }
}
