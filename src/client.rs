use crate::error::CrawlError;
use crate::Result;
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP transport. One request at a time; the per-request timeout
/// is the only time limit the crawl has.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(CrawlError::ClientInit)?;
        Ok(Self { inner })
    }

    pub fn get(&self, url: &str) -> Result<String> {
        let response = self
            .inner
            .get(url)
            .send()
            .map_err(|source| CrawlError::Transport {
                url: url.to_string(),
                source,
            })?;
        response.text().map_err(|source| CrawlError::Transport {
            url: url.to_string(),
            source,
        })
    }
}
