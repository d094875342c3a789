//! Event table construction and lifecycle.
//!
//! log files
//! read_source / parse_source
//! Enricher
//! DatasetBuilder (optionally one thread per source group)
//! EventTable
//! DatasetStore (atomic snapshot swap on refresh)

mod builder;
mod error;
mod store;
mod table;


pub use builder::{DatasetBuilder, IngestReport, SkippedSource, partition};
pub use error::RefreshError;
pub use store::{DatasetStore, RefreshSummary};
pub use table::EventTable;
