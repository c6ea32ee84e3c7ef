use super::{FetchError, Loader, finish};
use crate::model::Driver;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetch drivers from a statistics endpoint serving a JSON array of drivers.
pub struct HttpLoader {
    client: Client,
    url: String,
}

impl HttpLoader {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("f1rank/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| FetchError::Http {
                url: url.to_owned(),
                source,
            })?;
        Ok(Self {
            client,
            url: url.to_owned(),
        })
    }

    pub fn parse(body: &str) -> Result<Vec<Driver>, FetchError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[async_trait]
impl Loader for HttpLoader {
    fn name(&self) -> &'static str {
        "http"
    }

    #[instrument(skip_all, fields(url = %self.url))]
    async fn load(&mut self) -> Result<Vec<Driver>, FetchError> {
        let http_error = |source| FetchError::Http {
            url: self.url.clone(),
            source,
        };
        let body = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(http_error)?
            .text()
            .await
            .map_err(http_error)?;
        debug!(bytes = body.len(), "standings received");
        finish(self.name(), Self::parse(&body)?)
    }
}
