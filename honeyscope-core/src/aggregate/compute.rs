use crate::aggregate::count::count_by;
use crate::aggregate::views::{CommandCount, CountryCount, DayCount, IpCount, SessionSummary};
use crate::dataset::EventTable;
use crate::record::{EventKind, EventRecord};
use std::cmp::Reverse;

/// Connects per country, most frequent first. Unresolved connects are
/// counted under `country_short: None`.
pub fn country_counts(table: &EventTable) -> Vec<CountryCount> {
    count_by(table.connects().map(|r| r.country_short().map(str::to_string)))
        .into_iter()
        .map(|(country_short, country_count)| CountryCount {
            country_short,
            country_count,
        })
        .collect()
}

/// Connects per source IP, most frequent first.
pub fn ip_counts(table: &EventTable) -> Vec<IpCount> {
    count_by(table.connects().filter_map(EventRecord::src_ip))
        .into_iter()
        .map(|(src_ip, ip_count)| IpCount {
            src_ip: src_ip.to_string(),
            ip_count,
        })
        .collect()
}

/// One row per distinct command input (exact match), most frequent first.
pub fn top_commands(table: &EventTable) -> Vec<CommandCount> {
    count_by(table.iter().filter_map(EventRecord::input))
        .into_iter()
        .map(|(input, input_count)| CommandCount {
            input: input.to_string(),
            input_count,
        })
        .collect()
}

/// Every connect event, most recent first.
pub fn latest_sessions(table: &EventTable) -> Vec<SessionSummary> {
    let mut connects: Vec<&EventRecord> = table.connects().collect();
    connects.sort_by_key(|r| Reverse(r.timestamp));

    connects
        .into_iter()
        .filter_map(|r| {
            let EventKind::Connect { src_ip, geo } = &r.kind else {
                return None;
            };
            Some(SessionSummary {
                timestamp: r.timestamp,
                session: r.session.clone(),
                src_ip: src_ip.clone(),
                country_short: geo.as_ref().and_then(|g| g.country_short.clone()),
                isp: geo.as_ref().and_then(|g| g.isp.clone()),
            })
        })
        .collect()
}

/// Connects per UTC calendar day, newest day first.
pub fn day_repartition(table: &EventTable) -> Vec<DayCount> {
    let mut days: Vec<DayCount> = count_by(table.connects().map(|r| r.timestamp.date_naive()))
        .into_iter()
        .map(|(day, day_count)| DayCount { day, day_count })
        .collect();

    days.sort_by_key(|d| Reverse(d.day));
    days
}

/// Chronological replay of one session. Unknown sessions give an empty list.
pub fn session_detail<'a>(table: &'a EventTable, session_id: &str) -> Vec<&'a EventRecord> {
    let mut records: Vec<&EventRecord> = table
        .iter()
        .filter(|r| r.session.as_deref() == Some(session_id))
        .collect();

    records.sort_by_key(|r| r.timestamp);
    records
}
