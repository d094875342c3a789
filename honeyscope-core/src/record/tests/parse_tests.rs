use crate::ingest::IngestError;
use crate::record::{EventKind, RecordError, parse_line, parse_source};
use pretty_assertions::assert_eq;

const CONNECT: &str = r#"{"eventid":"cowrie.session.connect","src_ip":"1.2.3.4","src_port":51234,"session":"a1b2c3","timestamp":"2023-03-01T10:00:00.000000Z","sensor":"hp1"}"#;
const COMMAND: &str = r#"{"eventid":"cowrie.command.input","input":"ls -la","session":"a1b2c3","src_ip":"1.2.3.4","timestamp":"2023-03-01T10:00:05.500000Z"}"#;
const CLOSED: &str = r#"{"eventid":"cowrie.session.closed","duration":12.5,"session":"a1b2c3","timestamp":"2023-03-01T10:00:12.500000Z"}"#;

#[test]
fn parses_one_record_per_non_empty_line_in_order() {
    // Arrange
    let text = format!("{CONNECT}\n{COMMAND}\n{CLOSED}\n");

    // Act
    let records = parse_source("cowrie.json", &text).unwrap();

    // Assert
    let kinds: Vec<_> = records.iter().map(|r| r.kind.name()).collect();
    assert_eq!(
        kinds,
        vec!["session.connect", "command.input", "session.closed"]
    );
}

#[test]
fn trailing_and_interior_blank_lines_are_skipped() {
    // Arrange
    let text = format!("{CONNECT}\n\n{COMMAND}\n   \n");

    // Act
    let records = parse_source("cowrie.json", &text).unwrap();

    // Assert
    assert_eq!(records.len(), 2);
}

#[test]
fn empty_source_yields_no_records() {
    assert!(parse_source("empty.json", "").unwrap().is_empty());
    assert!(parse_source("empty.json", "\n").unwrap().is_empty());
}

#[test]
fn malformed_line_aborts_source_and_reports_line_number() {
    // Arrange
    let text = format!("{CONNECT}\nnot json\n{COMMAND}\n");

    // Act
    let err = parse_source("cowrie.json.2023-03-01", &text).unwrap_err();

    // Assert
    match err {
        IngestError::MalformedRecord {
            source_name,
            line,
            reason,
        } => {
            assert_eq!(source_name, "cowrie.json.2023-03-01");
            assert_eq!(line, 2);
            assert!(matches!(reason, RecordError::InvalidJson(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn line_numbers_count_skipped_blank_lines() {
    // Arrange
    let text = format!("{CONNECT}\n\n[1, 2]\n");

    // Act
    let err = parse_source("cowrie.json", &text).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        IngestError::MalformedRecord {
            line: 3,
            reason: RecordError::NotAnObject,
            ..
        }
    ));
}

#[test]
fn connect_event_keeps_src_ip_and_starts_unenriched() {
    // Act
    let record = parse_line(CONNECT).unwrap();

    // Assert
    assert_eq!(record.event_id, "cowrie.session.connect");
    assert_eq!(record.session.as_deref(), Some("a1b2c3"));
    assert_eq!(
        record.kind,
        EventKind::Connect {
            src_ip: "1.2.3.4".to_string(),
            geo: None
        }
    );
    assert_eq!(record.country_short(), None);
    assert_eq!(record.isp(), None);
}

#[test]
fn passthrough_fields_are_preserved() {
    // Act
    let record = parse_line(CONNECT).unwrap();

    // Assert
    assert_eq!(record.extra["src_port"], 51234);
    assert_eq!(record.extra["sensor"], "hp1");
    assert!(!record.extra.contains_key("eventid"));
    assert!(!record.extra.contains_key("timestamp"));
}

#[test]
fn non_connect_event_keeps_src_ip_as_passthrough() {
    // Act
    let record = parse_line(COMMAND).unwrap();

    // Assert
    assert_eq!(record.input(), Some("ls -la"));
    assert_eq!(record.src_ip(), Some("1.2.3.4"));
    assert_eq!(record.geo(), None);
}

#[test]
fn unknown_event_ids_pass_through() {
    // Arrange
    let line = r#"{"eventid":"cowrie.login.failed","username":"root","password":"admin","session":"s1","timestamp":"2023-03-01T10:00:01Z"}"#;

    // Act
    let record = parse_line(line).unwrap();

    // Assert
    assert_eq!(record.kind, EventKind::Other);
    assert_eq!(record.event_id, "cowrie.login.failed");
    assert_eq!(record.extra["username"], "root");
}

#[test]
fn unprefixed_event_ids_are_recognized() {
    // Arrange
    let line = r#"{"eventid":"session.connect","src_ip":"10.0.0.1","timestamp":"2023-03-01T10:00:01Z"}"#;

    // Act
    let record = parse_line(line).unwrap();

    // Assert
    assert!(record.is_connect());
    assert_eq!(record.session, None);
}

#[test]
fn missing_timestamp_is_malformed() {
    // Arrange
    let line = r#"{"eventid":"cowrie.session.closed","session":"s1"}"#;

    // Act
    let err = parse_line(line).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        RecordError::MissingField { field: "timestamp" }
    ));
}

#[test]
fn unparseable_timestamp_is_malformed() {
    // Arrange
    let line = r#"{"eventid":"cowrie.session.closed","timestamp":"yesterday"}"#;

    // Act
    let err = parse_line(line).unwrap_err();

    // Assert
    assert!(matches!(err, RecordError::InvalidTimestamp { .. }));
}

#[test]
fn connect_without_src_ip_is_malformed() {
    // Arrange
    let line = r#"{"eventid":"cowrie.session.connect","timestamp":"2023-03-01T10:00:01Z"}"#;

    // Act
    let err = parse_line(line).unwrap_err();

    // Assert
    assert!(matches!(err, RecordError::MissingField { field: "src_ip" }));
}

#[test]
fn stale_enrichment_columns_are_dropped_on_connect() {
    // Arrange
    let line = r#"{"eventid":"cowrie.session.connect","src_ip":"1.2.3.4","country_short":"XX","isp":"stale","timestamp":"2023-03-01T10:00:01Z"}"#;

    // Act
    let record = parse_line(line).unwrap();

    // Assert
    assert_eq!(record.country_short(), None);
    assert!(!record.extra.contains_key("country_short"));
    assert!(!record.extra.contains_key("isp"));
}

#[test]
fn timestamps_with_offsets_are_normalized_to_utc() {
    // Arrange
    let line = r#"{"eventid":"cowrie.session.closed","timestamp":"2023-03-01T01:30:00+02:00"}"#;

    // Act
    let record = parse_line(line).unwrap();

    // Assert
    assert_eq!(record.timestamp.to_rfc3339(), "2023-02-28T23:30:00+00:00");
}

#[test]
fn serialized_record_is_flat() {
    // Arrange
    let record = parse_line(COMMAND).unwrap();

    // Act
    let json = serde_json::to_value(&record).unwrap();

    // Assert
    assert_eq!(json["eventid"], "cowrie.command.input");
    assert_eq!(json["input"], "ls -la");
    assert_eq!(json["session"], "a1b2c3");
    assert_eq!(json["src_ip"], "1.2.3.4");
    assert_eq!(json["timestamp"], "2023-03-01T10:00:05.500000Z");
}

#[test]
fn invalid_utf8_is_malformed_at_its_line() {
    // Arrange
    let mut contents = Vec::new();
    contents.extend_from_slice(CONNECT.as_bytes());
    contents.extend_from_slice(b"\n\xff\xfe\n");
    contents.extend_from_slice(COMMAND.as_bytes());

    // Act
    let err = parse_source("cowrie.json", &contents).unwrap_err();

    // Assert
    match err {
        IngestError::MalformedRecord { line, reason, .. } => {
            assert_eq!(line, 2);
            assert!(matches!(reason, RecordError::InvalidUtf8(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn crlf_line_endings_are_accepted() {
    // Arrange
    let text = format!("{CONNECT}\r\n{COMMAND}\r\n");

    // Act
    let records = parse_source("cowrie.json", &text).unwrap();

    // Assert
    assert_eq!(records.len(), 2);
}
