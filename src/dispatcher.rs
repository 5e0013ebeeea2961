use crate::client::HttpClient;
use crate::error::CrawlError;
use crate::models::JobRecord;
use crate::templates::{brand, normal};
use crate::Result;
use chrono::Local;
use scraper::Html;
use std::thread;
use std::time::Duration;

/// Detail page layouts served by the site. Adding a layout means adding a
/// variant here and covering it in [`JobProcessor::process`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Normal,
    BrandDiamond,
    BrandPremium,
}

/// The keyword only narrows the choice down to a family; the two brand
/// layouts are told apart by a marker on the fetched page itself.
enum TemplateFamily {
    Normal,
    Brand,
}

impl TemplateFamily {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "viec-lam" => Some(Self::Normal),
            "brand" => Some(Self::Brand),
            _ => None,
        }
    }
}

/// Entry point for job detail page processing. Picks the extraction
/// strategy from the url shape, fetches the page and returns the canonical
/// record.
pub struct JobProcessor {
    client: HttpClient,
}

impl JobProcessor {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Processes one detail page url, pausing `pause_between_jobs` before
    /// the fetch to pace requests to the site.
    ///
    /// Fails with [`CrawlError::UnrecognizedTemplate`] when the first path
    /// segment matches no known keyword, and with a transport error when
    /// the detail fetch itself fails; both are per-job failures the caller
    /// is expected to catch and skip.
    pub fn process(&self, url: &str, pause_between_jobs: Duration) -> Result<JobRecord> {
        println!("Scraping job info at {}...", url);

        let keyword = first_path_segment(url);
        let family = TemplateFamily::from_keyword(keyword).ok_or_else(|| {
            CrawlError::UnrecognizedTemplate {
                keyword: keyword.to_string(),
                url: url.to_string(),
            }
        })?;

        thread::sleep(pause_between_jobs);
        let html = self.client.get(url)?;
        let document = Html::parse_document(&html);

        let template = match family {
            TemplateFamily::Normal => Template::Normal,
            TemplateFamily::Brand if brand::is_premium(&document) => Template::BrandPremium,
            TemplateFamily::Brand => Template::BrandDiamond,
        };

        Ok(match template {
            Template::Normal => normal::extract(&document, url),
            Template::BrandDiamond => {
                brand::extract_diamond(&document, url, Local::now().date_naive())
            }
            Template::BrandPremium => brand::extract_premium(&document, url),
        })
    }
}

/// First path segment after the domain, the template keyword.
fn first_path_segment(url: &str) -> &str {
    let without_scheme = url.splitn(2, "://").last().unwrap_or(url);
    without_scheme
        .splitn(2, '/')
        .nth(1)
        .unwrap_or("")
        .split('/')
        .next()
        .unwrap_or("")
}
