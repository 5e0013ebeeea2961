use std::path::Path;
use topcv_crawler::merge::merge_job_data;

fn main() {
    // data/ and merged_data/ are resolved against the working directory;
    // run this from the directory the crawler writes into.
    if let Err(e) = merge_job_data(Path::new(".")) {
        eprintln!("🚨 Failed to merge job data: {}", e);
    }
}
