//! Standalone merge utility: concatenates the per-page CSV files a day's
//! crawls produced under `data/<date>/` into one deduplicated file under
//! `merged_data/<date>/`.
//!
//! Both directories are resolved against the caller-supplied base
//! directory. The `merge` binary passes the process working directory, so
//! it must be run from the directory that holds `data/`.

use crate::writer::UTF8_BOM;
use crate::Result;
use chrono::Local;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Merges today's `job_data_page_*.csv` files.
pub fn merge_job_data(base_dir: &Path) -> Result<()> {
    let date_str = Local::now().format("%Y-%m-%d").to_string();
    merge_job_data_for_date(base_dir, &date_str)
}

/// Merges one day's per-page files. A missing source directory or an empty
/// file set is reported as a warning, not an error.
pub fn merge_job_data_for_date(base_dir: &Path, date_str: &str) -> Result<()> {
    let source_dir = base_dir.join("data").join(date_str);
    if !source_dir.is_dir() {
        println!("⚠️ Data directory not found: {}", source_dir.display());
        return Ok(());
    }

    let mut files: Vec<PathBuf> = fs::read_dir(&source_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.starts_with("job_data_page_") && name.ends_with(".csv"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        println!("⚠️ No CSV files found in {}", source_dir.display());
        return Ok(());
    }

    println!("🔍 Found {} files to merge:", files.len());
    for file in &files {
        if let Some(name) = file.file_name().and_then(|name| name.to_str()) {
            println!("   - {}", name);
        }
    }

    // Exact-duplicate rows are dropped; first occurrence wins, so row order
    // follows the (sorted) file order.
    let mut headers: Option<csv::StringRecord> = None;
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut rows: Vec<csv::StringRecord> = Vec::new();

    for file in &files {
        let content = fs::read_to_string(file)?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        let mut reader = csv::Reader::from_reader(content.as_bytes());

        if headers.is_none() {
            headers = Some(reader.headers()?.clone());
        }
        for record in reader.records() {
            let record = record?;
            let key: Vec<String> = record.iter().map(str::to_string).collect();
            if seen.insert(key) {
                rows.push(record);
            }
        }
    }

    let output_dir = base_dir.join("merged_data").join(date_str);
    fs::create_dir_all(&output_dir)?;
    let output_path = output_dir.join("job_data.csv");

    let mut file = fs::File::create(&output_path)?;
    file.write_all(UTF8_BOM)?;
    let mut writer = csv::Writer::from_writer(file);
    if let Some(headers) = &headers {
        writer.write_record(headers)?;
    }
    let total = rows.len();
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    println!("✅ Merged data saved to: {}", output_path.display());
    println!("📊 Total rows after merge: {}", total);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_page_file(dir: &Path, name: &str, body: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(UTF8_BOM).unwrap();
        file.write_all(body.as_bytes()).unwrap();
    }

    #[test]
    fn merges_pages_and_drops_exact_duplicates() {
        let base = std::env::temp_dir().join("topcv_merge_test");
        let source = base.join("data").join("2025-11-07");
        fs::remove_dir_all(&base).ok();
        fs::create_dir_all(&source).unwrap();

        write_page_file(
            &source,
            "job_data_page_1.csv",
            "job_id,job_title\n1,Dev\n2,QA\n",
        );
        write_page_file(
            &source,
            "job_data_page_2.csv",
            "job_id,job_title\n2,QA\n3,PM\n",
        );

        merge_job_data_for_date(&base, "2025-11-07").unwrap();

        let merged = fs::read(base.join("merged_data/2025-11-07/job_data.csv")).unwrap();
        assert_eq!(&merged[..3], UTF8_BOM);
        let content = String::from_utf8(merged[3..].to_vec()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["job_id,job_title", "1,Dev", "2,QA", "3,PM"]);

        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn missing_source_directory_is_only_a_warning() {
        let base = std::env::temp_dir().join("topcv_merge_missing_test");
        fs::remove_dir_all(&base).ok();
        assert!(merge_job_data_for_date(&base, "1999-01-01").is_ok());
    }

    #[test]
    fn directory_without_matching_files_is_only_a_warning() {
        let base = std::env::temp_dir().join("topcv_merge_empty_test");
        let source = base.join("data").join("2025-11-07");
        fs::remove_dir_all(&base).ok();
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("notes.txt"), "not a csv").unwrap();

        assert!(merge_job_data_for_date(&base, "2025-11-07").is_ok());
        assert!(!base.join("merged_data").exists());

        fs::remove_dir_all(&base).ok();
    }
}
