use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::{ConfigError, FetchError};

/// Retrieves the raw body of a dictionary page
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issue one GET for `url`. Non-success statuses are errors.
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// [`Fetcher`] over HTTP with a bounded per-request timeout
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        tracing::debug!(%url, "Fetching dictionary page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn fetcher(timeout: Duration) -> HttpFetcher {
        HttpFetcher::new(timeout, "zika-test").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hans/%E7%8C%AB"))
            .and(header("user-agent", "zika-test"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>猫</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/hans/%E7%8C%AB", server.uri())).unwrap();
        let body = fetcher(Duration::from_secs(5)).fetch(&url).await.unwrap();

        assert_eq!(body, "<html>猫</html>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/s?wd=x", server.uri())).unwrap();
        let err = fetcher(Duration::from_secs(5)).fetch(&url).await.unwrap_err();

        match err {
            FetchError::Status { status, ref url } => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/s?wd=x"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let err = fetcher(Duration::from_millis(50))
            .fetch(&url)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Network { .. }));
    }
}
