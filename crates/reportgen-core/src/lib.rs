//! reportgen-core: Report engine, answer matching, and aggregation.
//!
//! This crate defines the assessment data model, the data source trait, and
//! the diagnostic, progress, and feedback report algorithms built on them.

pub mod attempts;
pub mod engine;
pub mod error;
pub mod format;
pub mod matcher;
pub mod memory;
pub mod model;
pub mod reports;
pub mod statistics;
pub mod traits;

pub use engine::{ReportEngine, ReportKind};
pub use error::DataError;
pub use traits::{DataSource, ReferenceDataView, ReportGenerator};
