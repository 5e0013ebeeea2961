use crate::client::HttpClient;
use crate::Result;
use scraper::{Html, Selector};
use std::collections::{HashSet, VecDeque};

/// Fetches one page body. The crawl loop needs no more of a transport than
/// this, which keeps the pagination logic testable against fixture pages.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

impl Fetch for HttpClient {
    fn fetch(&self, url: &str) -> Result<String> {
        self.get(url)
    }
}

/// One parsed listing page: the detail urls it links to, in document order,
/// and the rel="next" link when the site paginates further.
pub struct ListingPage {
    pub job_urls: Vec<String>,
    pub next_page: Option<String>,
}

pub struct PageCrawler {
    client: HttpClient,
}

impl PageCrawler {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Lazily yields job detail page urls starting from `listing_url`.
    ///
    /// With `recursive` set, the crawl follows the rel="next" link page by
    /// page, yielding each page's items before the next page's. The sequence
    /// is single-pass: every url appears once, in discovery order, and
    /// replaying it means re-fetching the pages. A transport failure on a
    /// listing page ends the sequence instead of propagating, so one bad
    /// page cannot abort a multi-page crawl.
    pub fn detail_urls(&self, listing_url: &str, recursive: bool) -> DetailUrls<'_, HttpClient> {
        DetailUrls::new(&self.client, listing_url, recursive)
    }

    pub fn parse_listing(html: &str) -> ListingPage {
        let document = Html::parse_document(html);
        let job_selector = Selector::parse("div.job-item-2").unwrap();
        let link_selector = Selector::parse(r#"a[target="_blank"]"#).unwrap();
        let next_selector = Selector::parse(r#"a[rel="next"]"#).unwrap();

        let mut job_urls = Vec::new();
        for job in document.select(&job_selector) {
            let href = job
                .select(&link_selector)
                .next()
                .and_then(|link| link.value().attr("href"))
                .filter(|href| !href.is_empty());
            match href {
                Some(href) => job_urls.push(href.to_string()),
                None => println!("Warning: Job item found without a valid link."),
            }
        }

        let next_page = document
            .select(&next_selector)
            .next()
            .and_then(|link| link.value().attr("href"))
            .filter(|href| !href.is_empty())
            .map(String::from);

        ListingPage { job_urls, next_page }
    }
}

/// Pull-based iterator over detail page urls. The visited set guards
/// against a rel="next" cycle on the site; traversal order is unchanged
/// for well-formed pagination.
pub struct DetailUrls<'a, F> {
    fetcher: &'a F,
    pending: VecDeque<String>,
    next_page: Option<String>,
    visited: HashSet<String>,
    recursive: bool,
}

impl<'a, F: Fetch> DetailUrls<'a, F> {
    pub fn new(fetcher: &'a F, listing_url: &str, recursive: bool) -> Self {
        Self {
            fetcher,
            pending: VecDeque::new(),
            next_page: Some(listing_url.to_string()),
            visited: HashSet::new(),
            recursive,
        }
    }
}

impl<F: Fetch> Iterator for DetailUrls<'_, F> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(url) = self.pending.pop_front() {
                return Some(url);
            }

            let page_url = self.next_page.take()?;
            if !self.visited.insert(page_url.clone()) {
                eprintln!(
                    "Warning: listing page {} already visited, stopping the crawl.",
                    page_url
                );
                return None;
            }

            println!("Scraping job URLs at {}", page_url);
            let html = match self.fetcher.fetch(&page_url) {
                Ok(html) => html,
                Err(e) => {
                    eprintln!("Error requesting {}: {}", page_url, e);
                    return None;
                }
            };

            let page = PageCrawler::parse_listing(&html);
            self.pending.extend(page.job_urls);

            match page.next_page {
                Some(next) if self.recursive => {
                    println!("Page finished. Moving on to next page.");
                    self.next_page = Some(next);
                }
                _ => println!("Page finished. Crawl ended."),
            }
        }
    }
}
