//! Extract, transform, and load stages of the demo pipeline

use crate::error::{EtlError, Result};
use crate::warehouse::{LoadReport, WarehouseClient};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One row as it appears in the source CSV.
///
/// `amount` stays a raw string here; exports frequently carry empty cells
/// or a literal `None` placeholder.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSaleRecord {
    pub id: i64,
    pub product: String,
    #[serde(default)]
    pub amount: Option<String>,
}

/// One cleaned sale ready for loading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRecord {
    pub id: i64,
    pub product: String,
    pub amount: f64,
}

/// Load the raw dataset from disk
pub async fn extract(path: impl AsRef<Path>) -> Result<Vec<RawSaleRecord>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await?;
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    tracing::debug!("Extracted {} raw rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Drop duplicate rows and normalize the amount column.
///
/// Missing, empty, or `None` amounts become 0.0; a malformed numeric is
/// an error rather than silently zeroed.
pub fn transform(rows: Vec<RawSaleRecord>) -> Result<Vec<SaleRecord>> {
    let mut cleaned = Vec::new();
    let mut seen = HashSet::new();

    for (index, row) in rows.into_iter().enumerate() {
        let key = (row.id, row.product.clone(), row.amount.clone());
        if !seen.insert(key) {
            continue;
        }

        let amount =
            parse_amount(row.amount.as_deref()).ok_or_else(|| EtlError::InvalidAmount {
                row: index + 1,
                value: row.amount.clone().unwrap_or_default(),
            })?;
        cleaned.push(SaleRecord {
            id: row.id,
            product: row.product,
            amount,
        });
    }

    Ok(cleaned)
}

fn parse_amount(raw: Option<&str>) -> Option<f64> {
    match raw.map(str::trim) {
        None | Some("") | Some("None") => Some(0.0),
        Some(value) => value.parse().ok(),
    }
}

/// Write the cleaned records to the warehouse
pub async fn load(
    rows: &[SaleRecord],
    warehouse: &mut WarehouseClient,
    table: &str,
) -> Result<LoadReport> {
    warehouse.execute(format!(
        "CREATE OR REPLACE TABLE {table} (id int, product string, amount float)"
    ));
    let report = warehouse.write_records(rows, table).await?;
    tracing::info!("Loaded {} rows into {}", report.rows_written, report.table);
    Ok(report)
}

/// Run the full pipeline and return the number of rows loaded
pub async fn run(
    input: impl AsRef<Path>,
    warehouse: &mut WarehouseClient,
    table: &str,
) -> Result<usize> {
    let raw = extract(input).await?;
    let cleaned = transform(raw)?;
    let report = load(&cleaned, warehouse, table).await?;
    Ok(report.rows_written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn raw(id: i64, product: &str, amount: Option<&str>) -> RawSaleRecord {
        RawSaleRecord {
            id,
            product: product.to_string(),
            amount: amount.map(str::to_string),
        }
    }

    #[test]
    fn transform_drops_exact_duplicates() {
        let rows = vec![
            raw(1, "starter-plan", Some("120.50")),
            raw(1, "starter-plan", Some("120.50")),
            raw(2, "growth-plan", Some("340.00")),
        ];

        let cleaned = transform(rows).unwrap();
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].amount, 120.50);
    }

    #[test]
    fn transform_defaults_missing_amounts_to_zero() {
        let rows = vec![
            raw(1, "community-plan", None),
            raw(2, "community-plan", Some("")),
            raw(3, "community-plan", Some("None")),
        ];

        let cleaned = transform(rows).unwrap();
        assert!(cleaned.iter().all(|r| r.amount == 0.0));
    }

    #[test]
    fn transform_rejects_malformed_amounts() {
        let rows = vec![raw(1, "starter-plan", Some("not-a-number"))];
        let result = transform(rows);
        assert!(matches!(
            result,
            Err(EtlError::InvalidAmount { row: 1, value }) if value == "not-a-number"
        ));
    }

    #[tokio::test]
    async fn pipeline_extracts_transforms_and_loads() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sales.csv");
        let output = dir.path().join("warehouse.csv");

        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "id,product,amount").unwrap();
        writeln!(file, "1,starter-plan,120.50").unwrap();
        writeln!(file, "2,growth-plan,340.00").unwrap();
        writeln!(file, "2,growth-plan,340.00").unwrap();
        writeln!(file, "3,community-plan,").unwrap();
        drop(file);

        let mut warehouse = WarehouseClient::new(&output);
        let rows = run(&input, &mut warehouse, "SALES").await.unwrap();

        assert_eq!(rows, 3);
        assert!(
            warehouse
                .executed_statements()
                .iter()
                .any(|s| s.starts_with("CREATE OR REPLACE TABLE SALES"))
        );
        assert!(output.exists());

        let persisted = std::fs::read_to_string(&output).unwrap();
        assert!(persisted.contains("starter-plan"));
        assert!(persisted.contains("community-plan"));
    }
}
