use crate::ingest::IngestError;
use crate::record::error::RecordError;
use crate::record::types::{EventKind, EventRecord, EventTag};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Parse the raw contents of one log source.
///
/// Lines are decoded one at a time, so invalid UTF-8 is reported against its
/// line like any other malformed record. Blank lines are skipped. The first
/// malformed line aborts the whole source: no partial record list is ever
/// returned.
pub fn parse_source(
    source_name: &str,
    contents: impl AsRef<[u8]>,
) -> Result<Vec<EventRecord>, IngestError> {
    contents
        .as_ref()
        .split(|b| *b == b'\n')
        .enumerate()
        .map(|(idx, raw)| (idx + 1, raw.strip_suffix(b"\r").unwrap_or(raw)))
        .filter(|(_, raw)| !raw.trim_ascii().is_empty())
        .map(|(line, raw)| {
            decode_line(raw)
                .and_then(parse_line)
                .map_err(|reason| IngestError::malformed(source_name, line, reason))
        })
        .collect()
}

fn decode_line(raw: &[u8]) -> Result<&str, RecordError> {
    Ok(std::str::from_utf8(raw)?)
}

pub fn parse_line(line: &str) -> Result<EventRecord, RecordError> {
    let Value::Object(mut fields) = serde_json::from_str::<Value>(line)? else {
        return Err(RecordError::NotAnObject);
    };

    let event_id = take_string(&mut fields, "eventid")?;
    let timestamp = parse_timestamp(&take_string(&mut fields, "timestamp")?)?;

    let session = match fields.remove("session") {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            // Not ours to interpret; keep it for display.
            fields.insert("session".to_string(), other);
            None
        }
        None => None,
    };

    let kind = match EventTag::from_event_id(&event_id) {
        EventTag::Connect => EventKind::Connect {
            src_ip: take_string(&mut fields, "src_ip")?,
            geo: None,
        },
        EventTag::CommandInput => EventKind::CommandInput {
            input: take_string(&mut fields, "input")?,
        },
        EventTag::SessionClosed => EventKind::SessionClosed,
        EventTag::Other => EventKind::Other,
    };

    // Stale enrichment columns from a previous export must not leak through.
    if matches!(kind, EventKind::Connect { .. }) {
        fields.remove("country_short");
        fields.remove("isp");
    }

    Ok(EventRecord {
        event_id,
        timestamp,
        session,
        kind,
        extra: fields,
    })
}

fn take_string(fields: &mut Map<String, Value>, field: &'static str) -> Result<String, RecordError> {
    match fields.remove(field) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(RecordError::MissingField { field }),
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RecordError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|source| RecordError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}
