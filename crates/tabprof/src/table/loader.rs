//! CSV/TSV loader with delimiter detection and column type inference.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TabprofError};

use super::{Column, ColumnKind, DataTable, Value};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(), // ISO date
        Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap(), // US date
        Regex::new(r"^\d{2}-\d{2}-\d{4}").unwrap(), // European date
        Regex::new(r"^\d{4}/\d{2}/\d{2}").unwrap(), // Alt ISO
    ]
});

/// Check if a raw token represents a missing value.
pub fn is_null_token(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nil")
        || trimmed == "."
        || trimmed == "-"
}

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Loads delimited text files into typed [`DataTable`]s.
pub struct CsvLoader {
    config: LoaderConfig,
}

impl CsvLoader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file into a typed table.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<DataTable> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| TabprofError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| TabprofError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.load_bytes(&contents)
    }

    /// Load raw bytes into a typed table.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<DataTable> {
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };

        let (headers, rows) = self.read_records(bytes, delimiter)?;

        // Column-major raw strings, then infer a kind per column.
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                let raw: Vec<&str> = rows
                    .iter()
                    .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
                    .collect();
                build_column(name, &raw)
            })
            .collect();

        DataTable::new(columns)
    }

    /// Read headers and string rows with the csv crate.
    fn read_records(&self, bytes: &[u8], delimiter: u8) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            if headers.is_empty() {
                headers = (0..record.len())
                    .map(|i| format!("column_{}", i + 1))
                    .collect();
            }

            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            // Ragged lines are padded or truncated to the header width.
            while row.len() < headers.len() {
                row.push(String::new());
            }
            row.truncate(headers.len());
            rows.push(row);
        }

        if headers.is_empty() {
            return Err(TabprofError::EmptyData("no columns found".to_string()));
        }

        Ok((headers, rows))
    }
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Infer a column kind and convert raw tokens into typed cells.
/// Tokens that fail to parse under the elected kind become missing.
fn build_column(name: String, raw: &[&str]) -> Column {
    let kind = infer_kind(raw);
    let values = raw
        .iter()
        .map(|token| {
            if is_null_token(token) {
                None
            } else {
                parse_cell(token.trim(), kind)
            }
        })
        .collect();
    Column::new(name, kind, values)
}

/// Majority vote over per-token kind detection.
fn infer_kind(raw: &[&str]) -> ColumnKind {
    let mut counts: [(ColumnKind, usize); 4] = [
        (ColumnKind::Numeric, 0),
        (ColumnKind::Boolean, 0),
        (ColumnKind::Datetime, 0),
        (ColumnKind::Categorical, 0),
    ];

    for token in raw {
        if is_null_token(token) {
            continue;
        }
        let detected = detect_token_kind(token.trim());
        for slot in counts.iter_mut() {
            if slot.0 == detected {
                slot.1 += 1;
            }
        }
    }

    counts
        .iter()
        .max_by_key(|(_, count)| *count)
        .filter(|(_, count)| *count > 0)
        .map(|(kind, _)| *kind)
        .unwrap_or(ColumnKind::Other)
}

/// Detect the kind of a single non-null token.
fn detect_token_kind(token: &str) -> ColumnKind {
    if matches!(
        token.to_lowercase().as_str(),
        "true" | "false" | "yes" | "no"
    ) {
        return ColumnKind::Boolean;
    }

    if token.parse::<i64>().is_ok() || token.parse::<f64>().is_ok() {
        return ColumnKind::Numeric;
    }

    if DATE_PATTERNS.iter().any(|pattern| pattern.is_match(token)) {
        return ColumnKind::Datetime;
    }

    ColumnKind::Categorical
}

/// Parse a trimmed non-null token under the column's elected kind.
fn parse_cell(token: &str, kind: ColumnKind) -> Option<Value> {
    match kind {
        ColumnKind::Numeric => token.parse::<f64>().ok().map(Value::Number),
        ColumnKind::Boolean => match token.to_lowercase().as_str() {
            "true" | "yes" => Some(Value::Bool(true)),
            "false" | "no" => Some(Value::Bool(false)),
            _ => None,
        },
        ColumnKind::Datetime => parse_datetime(token).map(Value::DateTime),
        ColumnKind::Categorical | ColumnKind::Other => Some(Value::Text(token.to_string())),
    }
}

/// Try the supported date and datetime layouts.
fn parse_datetime(token: &str) -> Option<NaiveDateTime> {
    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y", "%Y/%m/%d"];

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(token, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(token, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(TabprofError::EmptyData("no lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent counts across lines beat raw frequency; tabs get a
        // slight bonus since they rarely appear inside actual data.
        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
