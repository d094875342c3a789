use crate::geo::DEFAULT_REMOTE_URL;
use crate::ingest::LogSources;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level contents of `honeyscope.hcl`. Every block is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HoneyscopeConfig {
    #[serde(default)]
    pub logs: LogsConfig,

    #[serde(default)]
    pub geoip: GeoIpConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogsConfig {
    #[serde(default = "default_logs_dir")]
    pub dir: PathBuf,

    /// Glob relative to `dir`.
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// File names skipped during discovery.
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Ingest worker threads. 1 means sequential.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Single source reloaded on refresh. Full directory rebuild when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_source: Option<PathBuf>,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            dir: default_logs_dir(),
            pattern: default_pattern(),
            ignore: default_ignore(),
            workers: default_workers(),
            refresh_source: None,
        }
    }
}

impl LogsConfig {
    pub fn sources(&self) -> LogSources {
        LogSources {
            dir: self.dir.clone(),
            pattern: self.pattern.clone(),
            ignore: self.ignore.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoBackend {
    Maxmind,
    Remote,
    #[default]
    Disabled,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeoIpConfig {
    #[serde(default)]
    pub backend: GeoBackend,

    /// MaxMind city or country database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_db: Option<PathBuf>,

    /// MaxMind ISP or ASN database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isp_db: Option<PathBuf>,

    /// Must contain `{ip}`.
    #[serde(default = "default_remote_url")]
    pub remote_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_true")]
    pub cache: bool,
}

impl Default for GeoIpConfig {
    fn default() -> Self {
        Self {
            backend: GeoBackend::default(),
            city_db: None,
            isp_db: None,
            remote_url: default_remote_url(),
            timeout_ms: default_timeout_ms(),
            cache: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    #[serde(default = "default_ten")]
    pub top_ips: usize,

    #[serde(default = "default_ten")]
    pub top_countries: usize,

    #[serde(default = "default_ten")]
    pub latest_sessions: usize,

    #[serde(default = "default_fifteen")]
    pub top_commands: usize,

    #[serde(default = "default_fifteen")]
    pub chart_countries: usize,

    /// Where `serve` writes the dashboard JSON. Stdout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_ips: 10,
            top_countries: 10,
            latest_sessions: 10,
            top_commands: 15,
            chart_countries: 15,
            output: None,
        }
    }
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_pattern() -> String {
    "*".to_string()
}

fn default_ignore() -> Vec<String> {
    vec![".DS_Store".to_string()]
}

fn default_workers() -> usize {
    1
}

fn default_remote_url() -> String {
    DEFAULT_REMOTE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

fn default_ten() -> usize {
    10
}

fn default_fifteen() -> usize {
    15
}
