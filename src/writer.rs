use crate::models::JobRecord;
use crate::Result;
use std::fs::File;
use std::io::Write;

/// Byte-order mark so spreadsheet software opens the file as UTF-8.
pub(crate) const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Writes one CSV row per record, dates rendered as `YYYY-MM-DD`.
/// Overwrites an existing file. Logs the outcome itself; an export failure
/// never aborts a crawl that already finished.
pub fn save_to_csv(records: &[JobRecord], file_path: &str) {
    match write_csv(records, file_path) {
        Ok(()) => println!("✅ Data successfully saved to {} (CSV).", file_path),
        Err(e) => eprintln!("❌ Error saving data to CSV: {}", e),
    }
}

/// Writes the records as a JSON array of objects, same date rendering as
/// the CSV export. Overwrites an existing file and logs the outcome itself.
pub fn save_to_json(records: &[JobRecord], file_path: &str) {
    match write_json(records, file_path) {
        Ok(()) => println!("✅ Data successfully saved to {} (JSON).", file_path),
        Err(e) => eprintln!("❌ Error saving data to JSON: {}", e),
    }
}

fn write_csv(records: &[JobRecord], file_path: &str) -> Result<()> {
    let mut file = File::create(file_path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(records: &[JobRecord], file_path: &str) -> Result<()> {
    let file = File::create(file_path)?;
    serde_json::to_writer_pretty(file, records)?;
    Ok(())
}
