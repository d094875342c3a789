use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    /// `None` groups the connects whose lookup failed.
    pub country_short: Option<String>,
    pub country_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpCount {
    pub src_ip: String,
    pub ip_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandCount {
    pub input: String,
    pub input_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub day: NaiveDate,
    pub day_count: u64,
}

/// One connect event, as listed in "latest sessions".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub timestamp: DateTime<Utc>,
    pub session: Option<String>,
    pub src_ip: String,
    pub country_short: Option<String>,
    pub isp: Option<String>,
}
