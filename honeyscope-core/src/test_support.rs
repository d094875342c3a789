//! Builders and fakes shared by the unit tests.

use crate::geo::{GeoInfo, GeoLookup, LookupError};
use crate::record::{EventKind, EventRecord};
use chrono::{DateTime, Utc};
use serde_json::Map;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

pub fn connect(at: &str, session: &str, src_ip: &str) -> EventRecord {
    EventRecord {
        event_id: "cowrie.session.connect".to_string(),
        timestamp: ts(at),
        session: Some(session.to_string()),
        kind: EventKind::Connect {
            src_ip: src_ip.to_string(),
            geo: None,
        },
        extra: Map::new(),
    }
}

pub fn enriched_connect(at: &str, session: &str, src_ip: &str, country: Option<&str>) -> EventRecord {
    let mut record = connect(at, session, src_ip);
    if let EventKind::Connect { geo, .. } = &mut record.kind {
        *geo = country.map(|c| GeoInfo {
            country_short: Some(c.to_string()),
            isp: None,
        });
    }
    record
}

pub fn command(at: &str, session: &str, input: &str) -> EventRecord {
    EventRecord {
        event_id: "cowrie.command.input".to_string(),
        timestamp: ts(at),
        session: Some(session.to_string()),
        kind: EventKind::CommandInput {
            input: input.to_string(),
        },
        extra: Map::new(),
    }
}

pub fn closed(at: &str, session: &str) -> EventRecord {
    EventRecord {
        event_id: "cowrie.session.closed".to_string(),
        timestamp: ts(at),
        session: Some(session.to_string()),
        kind: EventKind::SessionClosed,
        extra: Map::new(),
    }
}

pub fn connect_line(at: &str, session: &str, src_ip: &str) -> String {
    format!(
        r#"{{"eventid":"cowrie.session.connect","src_ip":"{src_ip}","src_port":40022,"session":"{session}","timestamp":"{at}"}}"#
    )
}

pub fn command_line(at: &str, session: &str, input: &str) -> String {
    format!(
        r#"{{"eventid":"cowrie.command.input","input":"{input}","session":"{session}","timestamp":"{at}"}}"#
    )
}

/// Fixed IP table that counts how often it is asked.
#[derive(Default)]
pub struct StaticLookup {
    entries: HashMap<IpAddr, GeoInfo>,
    transient: Vec<IpAddr>,
    calls: AtomicUsize,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, ip: &str, country: &str, isp: &str) -> Self {
        self.entries.insert(
            ip.parse().unwrap(),
            GeoInfo {
                country_short: Some(country.to_string()),
                isp: Some(isp.to_string()),
            },
        );
        self
    }

    /// `ip` fails with a retryable error.
    pub fn flaky(mut self, ip: &str) -> Self {
        self.transient.push(ip.parse().unwrap());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl GeoLookup for StaticLookup {
    fn lookup(&self, ip: IpAddr) -> Result<GeoInfo, LookupError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.transient.contains(&ip) {
            return Err(LookupError::Database("backend unavailable".to_string()));
        }
        self.entries
            .get(&ip)
            .cloned()
            .ok_or(LookupError::NotFound(ip))
    }
}
