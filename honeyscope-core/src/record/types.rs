use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// One parsed honeypot log line.
///
/// Records are created once by the parser, optionally enriched, and never
/// mutated after they land in an `EventTable`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    /// Raw event tag as written by the honeypot (e.g. `cowrie.session.connect`).
    pub event_id: String,
    pub timestamp: DateTime<Utc>,
    pub session: Option<String>,
    pub kind: EventKind,
    /// Fields the pipeline does not interpret. Kept for session replay.
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Connect {
        src_ip: String,
        /// Unset until a geo lookup succeeds.
        geo: Option<GeoInfo>,
    },
    CommandInput {
        input: String,
    },
    SessionClosed,
    Other,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Connect { .. } => "session.connect",
            EventKind::CommandInput { .. } => "command.input",
            EventKind::SessionClosed => "session.closed",
            EventKind::Other => "other",
        }
    }
}

/// Tag recognized from an `eventid` value, with or without the `cowrie.` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTag {
    Connect,
    CommandInput,
    SessionClosed,
    Other,
}

impl EventTag {
    pub fn from_event_id(event_id: &str) -> Self {
        let tag = event_id.strip_prefix("cowrie.").unwrap_or(event_id);
        match tag {
            "session.connect" => EventTag::Connect,
            "command.input" => EventTag::CommandInput,
            "session.closed" => EventTag::SessionClosed,
            _ => EventTag::Other,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeoInfo {
    /// ISO 3166 alpha-2 code, e.g. US, DE
    pub country_short: Option<String>,
    pub isp: Option<String>,
}

impl GeoInfo {
    pub fn has_some_info(&self) -> bool {
        self.country_short.is_some() || self.isp.is_some()
    }
}

impl EventRecord {
    pub fn is_connect(&self) -> bool {
        matches!(self.kind, EventKind::Connect { .. })
    }

    pub fn src_ip(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Connect { src_ip, .. } => Some(src_ip),
            _ => self.extra.get("src_ip").and_then(Value::as_str),
        }
    }

    pub fn geo(&self) -> Option<&GeoInfo> {
        match &self.kind {
            EventKind::Connect { geo, .. } => geo.as_ref(),
            _ => None,
        }
    }

    pub fn country_short(&self) -> Option<&str> {
        self.geo().and_then(|g| g.country_short.as_deref())
    }

    pub fn isp(&self) -> Option<&str> {
        self.geo().and_then(|g| g.isp.as_deref())
    }

    pub fn input(&self) -> Option<&str> {
        match &self.kind {
            EventKind::CommandInput { input } => Some(input),
            _ => None,
        }
    }
}

// Records serialize back to a flat object so session replay shows the line
// the way the honeypot wrote it, plus the enrichment columns.
impl Serialize for EventRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("eventid", &self.event_id)?;
        map.serialize_entry(
            "timestamp",
            &self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
        )?;
        if let Some(session) = &self.session {
            map.serialize_entry("session", session)?;
        }

        match &self.kind {
            EventKind::Connect { src_ip, geo } => {
                map.serialize_entry("src_ip", src_ip)?;
                if let Some(geo) = geo {
                    if let Some(country) = &geo.country_short {
                        map.serialize_entry("country_short", country)?;
                    }
                    if let Some(isp) = &geo.isp {
                        map.serialize_entry("isp", isp)?;
                    }
                }
            }
            EventKind::CommandInput { input } => {
                map.serialize_entry("input", input)?;
            }
            EventKind::SessionClosed | EventKind::Other => {}
        }

        for (k, v) in &self.extra {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
