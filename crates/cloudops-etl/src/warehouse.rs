//! Demo warehouse sink
//!
//! Stand-in for a real warehouse driver: it records every statement it is
//! asked to execute and persists loaded rows to a CSV file, so demo runs
//! leave an inspectable artifact instead of touching a live warehouse.

use crate::error::{EtlError, Result};
use crate::pipeline::SaleRecord;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of one bulk load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    pub table: String,
    pub rows_written: usize,
    pub chunks: usize,
}

/// Records statements and persists rows to a CSV file
pub struct WarehouseClient {
    output_path: PathBuf,
    executed: Vec<String>,
}

impl WarehouseClient {
    pub fn new(output_path: impl AsRef<Path>) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
            executed: Vec::new(),
        }
    }

    /// Record a statement without contacting any real warehouse
    pub fn execute(&mut self, statement: impl Into<String>) {
        let statement = statement.into();
        tracing::debug!("Executing statement: {}", statement);
        self.executed.push(statement);
    }

    /// Statements executed so far, in order
    pub fn executed_statements(&self) -> &[String] {
        &self.executed
    }

    /// Where loaded rows are persisted
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Persist the rows and report what was written
    pub async fn write_records(&mut self, rows: &[SaleRecord], table: &str) -> Result<LoadReport> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in rows {
            writer.serialize(row)?;
        }
        let bytes = writer.into_inner().map_err(|e| EtlError::LoadFailed {
            table: table.to_string(),
            message: e.to_string(),
        })?;
        tokio::fs::write(&self.output_path, bytes).await?;

        tracing::debug!(
            "Wrote {} rows for table {} to {}",
            rows.len(),
            table,
            self.output_path.display()
        );
        Ok(LoadReport {
            table: table.to_string(),
            rows_written: rows.len(),
            chunks: 1,
        })
    }
}
