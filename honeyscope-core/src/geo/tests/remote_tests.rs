use crate::geo::remote::geo_from_payload;
use crate::geo::{LookupError, RemoteLookup};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::net::IpAddr;
use std::time::Duration;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn success_payload_maps_country_code_and_isp() {
    // Arrange
    let payload = json!({
        "status": "success",
        "country": "Germany",
        "countryCode": "DE",
        "isp": "Contabo GmbH",
        "as": "AS51167 Contabo GmbH",
        "query": "167.86.82.168"
    });

    // Act
    let geo = geo_from_payload(ip("167.86.82.168"), &payload).unwrap();

    // Assert
    assert_eq!(geo.country_short.as_deref(), Some("DE"));
    assert_eq!(geo.isp.as_deref(), Some("Contabo GmbH"));
}

#[test]
fn fail_status_is_not_found() {
    // Arrange
    let payload = json!({ "status": "fail", "message": "reserved range", "query": "10.0.0.1" });

    // Act
    let err = geo_from_payload(ip("10.0.0.1"), &payload).unwrap_err();

    // Assert
    assert!(matches!(err, LookupError::NotFound(_)));
}

#[test]
fn empty_fields_count_as_missing() {
    // Arrange
    let payload = json!({ "status": "success", "countryCode": "", "isp": "" });

    // Act
    let err = geo_from_payload(ip("192.0.2.10"), &payload).unwrap_err();

    // Assert
    assert!(matches!(err, LookupError::NotFound(_)));
}

#[test]
fn url_template_substitutes_ip() {
    // Arrange
    let lookup =
        RemoteLookup::new("https://geo.example.test/ip/{ip}?fields=isp", Duration::from_secs(1))
            .unwrap();

    // Act
    let url = lookup.url_for(ip("2001:db8::1"));

    // Assert
    assert_eq!(url, "https://geo.example.test/ip/2001:db8::1?fields=isp");
}
