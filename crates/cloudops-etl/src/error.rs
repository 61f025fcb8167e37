//! ETL error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid amount '{value}' in row {row}")]
    InvalidAmount { row: usize, value: String },

    #[error("Loading rows into table {table} failed: {message}")]
    LoadFailed { table: String, message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;
