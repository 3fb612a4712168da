//! CSV loading for datasets.
//!
//! Supported format:
//! - UTF-8, comma-separated
//! - Optional header row (auto-detected: first row is a header if it contains
//!   any non-numeric, non-empty cell)
//! - Double-quoted fields with embedded commas and `""` escapes
//! - Blank lines are skipped
//!
//! Label modes:
//! - `ClassIndex`: the last column is an integer class index (0-based),
//!   one-hot encoded into a target vector of length `n_classes`.
//! - `Targets`: the last `n_targets` columns are the target vector as-is.

use std::path::Path;

use tracing::{debug, info};

use crate::data::record::{Dataset, Record};
use crate::error::DatasetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// Last column is an integer class index; one-hot encode to `n_classes`.
    ClassIndex { n_classes: usize },
    /// Last `n_targets` columns are the target vector.
    Targets { n_targets: usize },
}

/// Reads and parses a CSV file into a `Dataset`.
pub fn load_csv<P: AsRef<Path>>(path: P, label_mode: LabelMode) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let dataset = parse_csv(&text, label_mode)?;
    info!(
        path = %path.display(),
        records = dataset.len(),
        attributes = dataset.attribute_count().unwrap_or(0),
        targets = dataset.target_count().unwrap_or(0),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parses CSV text into a `Dataset`. Every row must yield the same number of
/// attributes; errors carry the 1-based line number.
pub fn parse_csv(text: &str, label_mode: LabelMode) -> Result<Dataset, DatasetError> {
    let mut lines = text.lines().enumerate().peekable();

    if let Some((_, first)) = lines.peek() {
        if is_header(first) {
            debug!(header = %first, "skipping header row");
            lines.next();
        }
    }

    let mut records = Vec::new();
    let mut n_attrs: Option<usize> = None;

    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells = parse_csv_row(line);
        let record = match label_mode {
            LabelMode::ClassIndex { n_classes } => {
                if cells.len() < 2 {
                    return Err(csv_error(line_no, format!(
                        "expected at least 2 columns (attributes + class index), got {}",
                        cells.len()
                    )));
                }
                let (attr_cells, label_cell) = cells.split_at(cells.len() - 1);
                let label = label_cell[0].trim();
                let class_idx: usize = label.parse().map_err(|_| {
                    csv_error(line_no, format!("class index '{label}' is not a non-negative integer"))
                })?;
                if class_idx >= n_classes {
                    return Err(csv_error(line_no, format!(
                        "class index {class_idx} >= n_classes {n_classes}"
                    )));
                }
                let mut one_hot = vec![0.0; n_classes];
                one_hot[class_idx] = 1.0;
                Record::new(parse_floats(attr_cells, line_no)?, one_hot)
            }
            LabelMode::Targets { n_targets } => {
                if cells.len() < n_targets + 1 {
                    return Err(csv_error(line_no, format!(
                        "expected at least {} columns, got {}",
                        n_targets + 1,
                        cells.len()
                    )));
                }
                let (attr_cells, target_cells) = cells.split_at(cells.len() - n_targets);
                Record::new(parse_floats(attr_cells, line_no)?, parse_floats(target_cells, line_no)?)
            }
        };

        let expected = *n_attrs.get_or_insert(record.attributes.len());
        if record.attributes.len() != expected {
            return Err(csv_error(line_no, format!(
                "attribute count {} does not match first row's {}",
                record.attributes.len(),
                expected
            )));
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }
    Dataset::new(records)
}

fn csv_error(line: usize, message: String) -> DatasetError {
    DatasetError::Csv { line, message }
}

/// Returns `true` if the row looks like a header (any cell non-numeric).
fn is_header(line: &str) -> bool {
    parse_csv_row(line).iter().any(|c| {
        let t = c.trim();
        !t.is_empty() && t.parse::<f64>().is_err()
    })
}

/// Splits a single CSV row, honouring double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_floats(cells: &[String], line: usize) -> Result<Vec<f64>, DatasetError> {
    cells.iter()
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .map_err(|_| csv_error(line, format!("'{c}' is not a valid number")))
        })
        .collect()
}
