//! Monitor error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{column}' not found in {}", .path.display())]
    ColumnNotFound { column: String, path: PathBuf },

    #[error("Value '{value}' in column '{column}' is not numeric")]
    InvalidValue { column: String, value: String },
}

pub type Result<T> = std::result::Result<T, MonitorError>;
