use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("failed to build http client: {0}")]
    ClientInit(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The first path segment of a detail page url matched no known template
    /// keyword. Wrong url input, or parsing for this page is not implemented.
    #[error("strange URL syntax detected (keyword: {keyword}) for {url}")]
    UnrecognizedTemplate { keyword: String, url: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
