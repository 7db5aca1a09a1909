//! reportgen-data: Data source integrations.
//!
//! Implements the `DataSource` trait over a directory of JSON files and loads
//! the configuration that locates that directory.

pub mod config;
pub mod json;

pub use config::{load_config_from, DataConfig, ReportgenConfig};
pub use json::JsonDataSource;
