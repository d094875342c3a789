mod error;
mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{CONFIG_FILE, load_config, parse_config, validate_config};
pub use types::{DashboardConfig, GeoBackend, GeoIpConfig, HoneyscopeConfig, LogsConfig};
