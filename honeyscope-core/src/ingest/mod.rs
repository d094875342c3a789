mod error;
mod source;


pub use error::IngestError;
pub use source::{LogSources, discover_sources, read_source, resolve_glob};
