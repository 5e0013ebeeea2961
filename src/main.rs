use chrono::Local;
use std::time::Duration;
use topcv_crawler::{save_to_csv, save_to_json, HttpClient, JobProcessor, PageCrawler, Result};

const START_URL: &str = "https://www.topcv.vn/viec-lam-it?page=2";
const PAUSE_BETWEEN_JOBS: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let client = HttpClient::new()?;
    let crawler = PageCrawler::new(client.clone());
    let processor = JobProcessor::new(client);

    println!("--- Starting Job Crawler ---");

    // Set recursive to true to crawl every listing page.
    let mut records = Vec::new();
    for job_url in crawler.detail_urls(START_URL, false) {
        match processor.process(&job_url, PAUSE_BETWEEN_JOBS) {
            Ok(record) => {
                println!(
                    "Successfully scraped: {} at {}",
                    record.job_title, record.company
                );
                records.push(record);
            }
            Err(e) => eprintln!("Failed to process job URL {}: {}", job_url, e),
        }
    }

    println!("\n--- Crawling Finished ---");
    println!("Total jobs crawled: {}", records.len());

    if records.is_empty() {
        println!("No data was crawled to save.");
        return Ok(());
    }

    // Export everything collected, even after per-job failures. The
    // writers log their own outcome and never abort the finished crawl.
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    save_to_csv(&records, &format!("job_data_{}.csv", timestamp));
    save_to_json(&records, &format!("job_data_{}.json", timestamp));

    Ok(())
}
