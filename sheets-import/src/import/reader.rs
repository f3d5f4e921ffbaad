//! CSV decoding

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;
use serde::de::DeserializeOwned;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read every record of a headed CSV file
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    parse_records(bytes.as_slice(), &path.display().to_string())
}

/// Decode headed CSV from any reader; `origin` names the input in errors
pub fn parse_records<T: DeserializeOwned, R: Read>(mut input: R, origin: &str) -> Result<Vec<T>> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read {}", origin))?;

    let data = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(data);

    let headers = reader
        .headers()
        .with_context(|| format!("{}: invalid header row", origin))?
        .clone();

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // header is line 1
        let fallback_line = idx as u64 + 2;
        let raw = result
            .with_context(|| format!("{}: invalid record at line {}", origin, fallback_line))?;
        let line = raw.position().map_or(fallback_line, |p| p.line());

        if raw.len() != headers.len() {
            log::warn!(
                "{}: line {} has {} fields, expected {}",
                origin,
                line,
                raw.len(),
                headers.len()
            );
        }

        let record = fit_to_headers(&raw, headers.len())
            .deserialize(Some(&headers))
            .with_context(|| format!("{}: invalid record at line {}", origin, line))?;
        records.push(record);
    }

    log::debug!("Read {} records from {}", records.len(), origin);
    Ok(records)
}

/// Drop fields past the header and fill missing trailing fields with `""`
fn fit_to_headers(raw: &StringRecord, width: usize) -> StringRecord {
    let mut fitted: StringRecord = raw.iter().take(width).collect();
    while fitted.len() < width {
        fitted.push_field("");
    }
    fitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::records::{Broadcast, Student};

    const STUDENTS: &str = "full_name,phone_number,grade_year,subjects,teachers,registered_at,student_id\n\
                            Ali,0600,3,Math,X,2024-01-01,S1\n\
                            Sara,0611,2,\"Arabic, French\",Y,2024-01-02,S2\n";

    #[test]
    fn test_parse_students() {
        let students: Vec<Student> = parse_records(STUDENTS.as_bytes(), "students.csv").unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].full_name, "Ali");
        assert_eq!(students[1].subjects, "Arabic, French");
        assert_eq!(students[1].student_id, "S2");
    }

    #[test]
    fn test_parse_strips_bom() {
        let mut input = UTF8_BOM.to_vec();
        input.extend_from_slice(STUDENTS.as_bytes());

        let students: Vec<Student> = parse_records(input.as_slice(), "students.csv").unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].full_name, "Ali");
    }

    #[test]
    fn test_header_only_yields_nothing() {
        let input = "title,message,target,status,created_at,broadcast_id\n";

        let broadcasts: Vec<Broadcast> = parse_records(input.as_bytes(), "broadcasts.csv").unwrap();

        assert!(broadcasts.is_empty());
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let input = "title,message,target,status,created_at,broadcast_id,sent_by\n\
                     Hi,Hello,all,sent,2024-01-01,B1,admin\n";

        let broadcasts: Vec<Broadcast> = parse_records(input.as_bytes(), "broadcasts.csv").unwrap();

        assert_eq!(broadcasts[0].target, "all");
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let input = "title,message,target,status,created_at\nHi,Hello,all,sent,2024-01-01\n";

        let err = parse_records::<Broadcast, _>(input.as_bytes(), "broadcasts.csv").unwrap_err();

        assert!(err.to_string().contains("broadcasts.csv: invalid record at line 2"));
    }

    #[test]
    fn test_short_row_fills_missing_fields_with_empty() {
        let input = "title,message,target,status,created_at,broadcast_id\n\
                     Short,row\n\
                     Full,Body,all,sent,2024-01-01,B2\n";

        let broadcasts: Vec<Broadcast> = parse_records(input.as_bytes(), "broadcasts.csv").unwrap();

        assert_eq!(broadcasts.len(), 2);
        assert_eq!(broadcasts[0].title, "Short");
        assert_eq!(broadcasts[0].message, "row");
        assert_eq!(broadcasts[0].target, "");
        assert_eq!(broadcasts[0].broadcast_id, "");
        assert_eq!(broadcasts[1].broadcast_id, "B2");
    }

    #[test]
    fn test_long_row_drops_extra_fields() {
        let input = "title,message,target,status,created_at,broadcast_id\n\
                     Exam,Tomorrow, 9am,students,failed,2024-03-01,B1\n";

        let broadcasts: Vec<Broadcast> = parse_records(input.as_bytes(), "broadcasts.csv").unwrap();

        assert_eq!(broadcasts.len(), 1);
        assert_eq!(broadcasts[0].message, "Tomorrow");
        assert_eq!(broadcasts[0].target, " 9am");
        assert_eq!(broadcasts[0].status, "students");
        assert_eq!(broadcasts[0].broadcast_id, "2024-03-01");
    }

    #[test]
    fn test_fit_to_headers() {
        let raw = StringRecord::from(vec!["a", "b", "c"]);

        let fields = |record: StringRecord| -> Vec<String> {
            record.iter().map(str::to_string).collect()
        };

        assert_eq!(fields(fit_to_headers(&raw, 2)), vec!["a", "b"]);
        assert_eq!(fields(fit_to_headers(&raw, 5)), vec!["a", "b", "c", "", ""]);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_records::<Student>(Path::new("/definitely/not/here/students.csv"))
            .unwrap_err();

        assert!(err.to_string().starts_with("Failed to open CSV file"));
    }
}
