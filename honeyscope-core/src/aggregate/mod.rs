//! Read-only views over an `EventTable`.
//!
//! Every function here is pure: it borrows the table, never mutates it, and
//! returns plain rows ready for serialization.

mod compute;
mod count;
mod views;


pub use compute::{
    country_counts, day_repartition, ip_counts, latest_sessions, session_detail, top_commands,
};
pub use views::{CommandCount, CountryCount, DayCount, IpCount, SessionSummary};
