use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Logs
    //-------------------------------------------------------------------------
    #[error("invalid log file pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("logs.workers must be at least 1")]
    ZeroWorkers,

    //-------------------------------------------------------------------------
    // GeoIP
    //-------------------------------------------------------------------------
    #[error("geoip backend 'maxmind' requires 'city_db'")]
    MissingCityDb,

    #[error("geoip remote_url '{url}' has no '{{ip}}' placeholder")]
    MissingIpPlaceholder { url: String },

    #[error("geoip timeout_ms must be greater than 0")]
    ZeroTimeout,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
