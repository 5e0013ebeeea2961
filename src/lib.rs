pub mod client;
pub mod crawler;
pub mod dispatcher;
pub mod error;
pub mod merge;
pub mod models;
pub mod normalize;
pub mod templates;
pub mod writer;

pub use client::HttpClient;
pub use crawler::{DetailUrls, Fetch, ListingPage, PageCrawler};
pub use dispatcher::{JobProcessor, Template};
pub use error::CrawlError;
pub use models::JobRecord;
pub use writer::{save_to_csv, save_to_json};

pub type Result<T> = std::result::Result<T, CrawlError>;
