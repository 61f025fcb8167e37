//! Demo ETL pipeline for the CloudOps accelerator
//!
//! Extracts a sales CSV, cleans it (duplicate rows dropped, amounts
//! normalized), and loads it into a demo warehouse sink that records the
//! statements it executes and persists the rows to disk.
//!
//! # Example
//!
//! ```ignore
//! use cloudops_etl::{WarehouseClient, pipeline};
//!
//! let mut warehouse = WarehouseClient::new("warehouse_output.csv");
//! let rows = pipeline::run("sample_sales.csv", &mut warehouse, "SALES").await?;
//! println!("{rows} rows loaded");
//! ```

pub mod error;
pub mod pipeline;
pub mod warehouse;

// Re-exports
pub use error::{EtlError, Result};
pub use pipeline::{RawSaleRecord, SaleRecord, extract, load, transform};
pub use warehouse::{LoadReport, WarehouseClient};
