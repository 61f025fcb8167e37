//! Statistical spot checks over CSV telemetry exports
//!
//! A basic z-score filter intended for demo datasets: rows whose value
//! column deviates more than three standard deviations from the column
//! mean are reported as anomalous.

pub mod error;

pub use error::{MonitorError, Result};

use std::collections::BTreeMap;
use std::path::Path;

/// Absolute z-score above which a row is considered anomalous
pub const Z_SCORE_THRESHOLD: f64 = 3.0;

/// One CSV row keyed by column name
pub type Record = BTreeMap<String, String>;

/// Return the rows of `path` whose `value_column` is a statistical outlier.
///
/// Fails when the file has no data rows or lacks the requested column.
/// Empty and `None` cells read as 0.0. A column with zero deviation
/// yields no anomalies.
pub async fn detect_anomalies(path: impl AsRef<Path>, value_column: &str) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await?;
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows: Vec<Record> = Vec::new();
    for row in reader.records() {
        let row = row?;
        rows.push(
            headers
                .iter()
                .map(str::to_string)
                .zip(row.iter().map(str::to_string))
                .collect(),
        );
    }

    if rows.is_empty() || !headers.iter().any(|h| h == value_column) {
        return Err(MonitorError::ColumnNotFound {
            column: value_column.to_string(),
            path: path.to_path_buf(),
        });
    }

    let mut values = Vec::with_capacity(rows.len());
    for row in &rows {
        values.push(parse_value(
            row.get(value_column).map(String::as_str),
            value_column,
        )?);
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        return Ok(Vec::new());
    }

    let anomalies: Vec<Record> = rows
        .into_iter()
        .zip(values)
        .filter(|(_, value)| ((value - mean) / std_dev).abs() > Z_SCORE_THRESHOLD)
        .map(|(row, _)| row)
        .collect();
    tracing::debug!(
        "Found {} anomalous rows in {} on column {}",
        anomalies.len(),
        path.display(),
        value_column
    );
    Ok(anomalies)
}

fn parse_value(raw: Option<&str>, column: &str) -> Result<f64> {
    match raw.map(str::trim) {
        None | Some("") | Some("None") => Ok(0.0),
        Some(value) => value.parse().map_err(|_| MonitorError::InvalidValue {
            column: column.to_string(),
            value: value.to_string(),
        }),
    }
}
