//! Honeypot event records.
//!
//! Each line of a Cowrie JSON log becomes one `EventRecord`. The event tag is
//! turned into an `EventKind` up front so the aggregation code never has to
//! probe for optional fields.

mod error;
mod parse;
mod types;

#[cfg(test)]
mod tests;

pub use error::RecordError;
pub use parse::{parse_line, parse_source};
pub use types::{EventKind, EventRecord, EventTag, GeoInfo};
