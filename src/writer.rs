//! Output writer
//!
//! Dispatches on the output path extension: `.xlsx` writes a spreadsheet
//! sheet, anything else writes UTF-8 CSV with a byte-order mark and a
//! header row.

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::models::{JobField, JobRecord};

pub fn save_records(records: &[JobRecord], path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    info!("Writing {} records to {}", records.len(), path.display());

    match extension.as_str() {
        "xlsx" => save_xlsx(records, path),
        _ => save_csv(records, path),
    }
}

fn save_csv(records: &[JobRecord], path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    // Excel expects a BOM on UTF-8 CSVs
    file.write_all(b"\xEF\xBB\xBF")?;

    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn save_xlsx(records: &[JobRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, field) in JobField::ALL.iter().enumerate() {
        worksheet.write_string(0, col as u16, field.name())?;
    }

    for (row, record) in records.iter().enumerate() {
        let row = row as u32 + 1;
        for (col, field) in JobField::ALL.iter().enumerate() {
            let col = col as u16;
            match field {
                // Salary bounds stay numeric cells
                JobField::SalaryMin => {
                    if let Some(v) = record.salary_min {
                        worksheet.write_number(row, col, v)?;
                    }
                }
                JobField::SalaryMax => {
                    if let Some(v) = record.salary_max {
                        worksheet.write_number(row, col, v)?;
                    }
                }
                _ => {
                    if let Some(v) = field.value(record) {
                        worksheet.write_string(row, col, v.as_str())?;
                    }
                }
            }
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save workbook: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<JobRecord> {
        vec![
            JobRecord {
                title: Some("Financial Analyst".to_string()),
                company: Some("Acme".to_string()),
                job_url: Some("https://jobs.example/1".to_string()),
                salary_min: Some(70000.0),
                search_location: Some("United States".to_string()),
                ..Default::default()
            },
            JobRecord {
                title: Some("Contrôleur de gestion".to_string()),
                company: Some("Globex".to_string()),
                search_location: Some("Paris, France".to_string()),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_csv_has_bom_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        save_records(&sample_records(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");

        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("title,company,location,date_posted"));
        assert!(header.ends_with("job_type,search_location"));
        assert_eq!(lines.count(), 2);
        // Non-ASCII survives the round trip
        assert!(text.contains("Contrôleur de gestion"));
    }

    #[test]
    fn test_missing_values_are_empty_csv_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        save_records(&sample_records(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let globex_row = text.lines().find(|l| l.contains("Globex")).unwrap();
        // No salary bounds on the second record
        assert!(globex_row.contains(",,"));
    }

    #[test]
    fn test_xlsx_extension_writes_a_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        save_records(&sample_records(), &path).unwrap();

        // xlsx files are zip archives
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_extension_dispatch_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.XLSX");
        save_records(&sample_records(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
