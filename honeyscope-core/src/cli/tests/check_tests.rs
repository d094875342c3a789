use crate::cli::conf::config_error_hint;
use crate::conf::ConfigError;

#[test]
fn validation_errors_carry_hints() {
    // Arrange
    let errors = [
        ConfigError::ZeroWorkers,
        ConfigError::MissingCityDb,
        ConfigError::ZeroTimeout,
        ConfigError::MissingIpPlaceholder {
            url: "https://example.test/".to_string(),
        },
    ];

    // Assert
    for err in &errors {
        assert!(config_error_hint(err).is_some(), "no hint for {err}");
    }
}

#[test]
fn placeholder_hint_shows_example_url() {
    // Act
    let hint = config_error_hint(&ConfigError::MissingIpPlaceholder {
        url: "https://example.test/".to_string(),
    })
    .unwrap();

    // Assert
    assert!(hint.contains("{ip}"));
}

#[test]
fn io_errors_have_no_hint() {
    // Arrange
    let err = ConfigError::read_file(
        "missing/honeyscope.hcl",
        std::io::Error::from(std::io::ErrorKind::NotFound),
    );

    // Assert
    assert!(config_error_hint(&err).is_none());
}
