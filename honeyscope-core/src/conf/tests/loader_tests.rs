use crate::conf::{CONFIG_FILE, ConfigError, GeoBackend, load_config, parse_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_config(root: &Path, body: &str) {
    fs::write(root.join(CONFIG_FILE), body).unwrap();
}

#[test]
fn empty_file_uses_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    write_config(dir.path(), "");

    // Act
    let cfg = load_config(dir.path()).unwrap();

    // Assert
    assert_eq!(cfg.logs.dir, dir.path().join("logs"));
    assert_eq!(cfg.logs.pattern, "*");
    assert_eq!(cfg.logs.ignore, vec![".DS_Store".to_string()]);
    assert_eq!(cfg.logs.workers, 1);
    assert_eq!(cfg.geoip.backend, GeoBackend::Disabled);
    assert!(cfg.geoip.cache);
    assert_eq!(cfg.dashboard.top_ips, 10);
    assert_eq!(cfg.dashboard.top_commands, 15);
}

#[test]
fn full_file_is_parsed_and_paths_resolved() {
    // Arrange
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
logs {
  dir            = "cowrie"
  pattern        = "cowrie.json*"
  ignore         = [".DS_Store", "README"]
  workers        = 6
  refresh_source = "cowrie/cowrie.json"
}

geoip {
  backend = "maxmind"
  city_db = "/var/lib/GeoIP/GeoLite2-City.mmdb"
  isp_db  = "data/GeoLite2-ASN.mmdb"
}

dashboard {
  top_ips = 5
  output  = "out/dashboard.json"
}
"#,
    );

    // Act
    let cfg = load_config(dir.path()).unwrap();

    // Assert
    assert_eq!(cfg.logs.dir, dir.path().join("cowrie"));
    assert_eq!(cfg.logs.workers, 6);
    assert_eq!(
        cfg.logs.refresh_source,
        Some(dir.path().join("cowrie/cowrie.json"))
    );
    assert_eq!(cfg.geoip.backend, GeoBackend::Maxmind);
    assert_eq!(
        cfg.geoip.city_db,
        Some(PathBuf::from("/var/lib/GeoIP/GeoLite2-City.mmdb"))
    );
    assert_eq!(
        cfg.geoip.isp_db,
        Some(dir.path().join("data/GeoLite2-ASN.mmdb"))
    );
    assert_eq!(cfg.dashboard.top_ips, 5);
    assert_eq!(cfg.dashboard.top_countries, 10);
    assert_eq!(
        cfg.dashboard.output,
        Some(dir.path().join("out/dashboard.json"))
    );
}

#[test]
fn missing_file_is_read_error() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let err = load_config(dir.path()).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn unknown_field_is_parse_error() {
    // Act
    let err = parse_config(Path::new("honeyscope.hcl"), "logs {\n  dirr = \"x\"\n}\n").unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unknown_backend_is_parse_error() {
    // Act
    let err =
        parse_config(Path::new("honeyscope.hcl"), "geoip {\n  backend = \"ip2location\"\n}\n")
            .unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn zero_workers_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    write_config(dir.path(), "logs {\n  workers = 0\n}\n");

    // Act
    let err = load_config(dir.path()).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::ZeroWorkers));
}

#[test]
fn maxmind_without_city_db_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    write_config(dir.path(), "geoip {\n  backend = \"maxmind\"\n}\n");

    // Act
    let err = load_config(dir.path()).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::MissingCityDb));
}

#[test]
fn remote_url_without_placeholder_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        "geoip {\n  backend    = \"remote\"\n  remote_url = \"https://example.test/ip\"\n}\n",
    );

    // Act
    let err = load_config(dir.path()).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::MissingIpPlaceholder { .. }));
}

#[test]
fn invalid_glob_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    write_config(dir.path(), "logs {\n  pattern = \"[\"\n}\n");

    // Act
    let err = load_config(dir.path()).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Glob { .. }));
}
