pub mod fixtures;
pub mod lookup;
pub mod tracing;
pub mod upstream;

pub use fixtures::{LogDir, closed_line, command_line, connect_line, write_config};
pub use lookup::StaticLookup;
pub use self::tracing::{CapturedEvent, captured_events, events_with_message};
pub use upstream::GeoUpstream;
