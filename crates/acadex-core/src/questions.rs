use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Columns a question CSV must carry, in any order. `points` is optional
/// and defaults to 1 on the backend.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "question", "option_a", "option_b", "option_c", "option_d", "answer",
];
pub const POINTS_COLUMN: &str = "points";

/// One problem found in a question CSV.
#[derive(Debug, Clone, Serialize)]
pub struct CsvIssue {
    /// 1-based line in the file (header is line 1).
    pub line: u64,
    pub field: String,
    pub message: String,
}

/// Result of locally validating a question CSV before upload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CsvReport {
    pub rows: usize,
    pub issues: Vec<CsvIssue>,
}

impl CsvReport {
    pub fn ok(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(&mut self, line: u64, field: &str, message: impl Into<String>) {
        self.issues.push(CsvIssue {
            line,
            field: field.to_string(),
            message: message.into(),
        });
    }
}

pub fn validate_file(path: &Path) -> Result<CsvReport> {
    let file = std::fs::File::open(path)?;
    validate_reader(file)
}

/// Validate a question CSV: required headers present, every row complete,
/// answer one of A-D, points (when given) a positive integer.
///
/// Parse failures on individual rows become issues rather than aborting,
/// so one bad row does not hide the rest of the report.
pub fn validate_reader<R: Read>(reader: R) -> Result<CsvReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut report = CsvReport::default();

    let headers = csv_reader.headers()?.clone();
    let mut column_index = [usize::MAX; REQUIRED_COLUMNS.len()];
    for (required_index, required) in REQUIRED_COLUMNS.iter().enumerate() {
        match headers.iter().position(|h| h.eq_ignore_ascii_case(required)) {
            Some(found) => column_index[required_index] = found,
            None => report.push(1, required, "missing column"),
        }
    }
    let points_index = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(POINTS_COLUMN));

    // Row checks are pointless without the full header set.
    if !report.ok() {
        return Ok(report);
    }

    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                let line = err.position().map(|p| p.line()).unwrap_or(0);
                report.push(line, "row", err.to_string());
                continue;
            }
        };
        report.rows += 1;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        for (required_index, required) in REQUIRED_COLUMNS.iter().enumerate() {
            let value = record.get(column_index[required_index]).unwrap_or("");
            if value.is_empty() {
                report.push(line, required, "empty value");
            } else if *required == "answer" && !is_valid_answer(value) {
                report.push(line, required, format!("'{}' is not one of A, B, C, D", value));
            }
        }

        if let Some(points_index) = points_index {
            let value = record.get(points_index).unwrap_or("");
            if !value.is_empty() && !is_valid_points(value) {
                report.push(
                    line,
                    POINTS_COLUMN,
                    format!("'{}' is not a positive integer", value),
                );
            }
        }
    }

    if report.rows == 0 {
        report.push(1, "file", "no question rows");
    }

    Ok(report)
}

fn is_valid_answer(value: &str) -> bool {
    matches!(
        value.to_ascii_uppercase().as_str(),
        "A" | "B" | "C" | "D"
    )
}

fn is_valid_points(value: &str) -> bool {
    value.parse::<u32>().map(|points| points >= 1).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "question,option_a,option_b,option_c,option_d,answer,points\n\
        What is 2+2?,1,2,3,4,D,2\n\
        Capital of France?,Paris,Lyon,Nice,Lille,a,\n";

    #[test]
    fn accepts_well_formed_file() {
        let report = validate_reader(GOOD.as_bytes()).unwrap();
        assert!(report.ok(), "unexpected issues: {:?}", report.issues);
        assert_eq!(report.rows, 2);
    }

    #[test]
    fn rejects_missing_columns_without_row_noise() {
        let report = validate_reader("question,answer\nQ?,A\n".as_bytes()).unwrap();
        assert!(!report.ok());
        assert!(report.issues.iter().all(|issue| issue.line == 1));
        assert!(report.issues.iter().any(|issue| issue.field == "option_a"));
    }

    #[test]
    fn flags_bad_answer_and_points_with_line_numbers() {
        let csv = "question,option_a,option_b,option_c,option_d,answer,points\n\
            Q1?,1,2,3,4,E,1\n\
            Q2?,1,2,3,4,B,zero\n";
        let report = validate_reader(csv.as_bytes()).unwrap();
        assert_eq!(report.rows, 2);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0].line, 2);
        assert_eq!(report.issues[0].field, "answer");
        assert_eq!(report.issues[1].line, 3);
        assert_eq!(report.issues[1].field, "points");
    }

    #[test]
    fn flags_empty_cells() {
        let csv = "question,option_a,option_b,option_c,option_d,answer\n\
            ,1,2,3,4,A\n";
        let report = validate_reader(csv.as_bytes()).unwrap();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].field, "question");
    }

    #[test]
    fn empty_file_is_reported() {
        let csv = "question,option_a,option_b,option_c,option_d,answer\n";
        let report = validate_reader(csv.as_bytes()).unwrap();
        assert!(!report.ok());
        assert_eq!(report.issues[0].field, "file");
    }
}
