use std::net::IpAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid IP address '{0}'")]
    InvalidIp(String),

    #[error("no geolocation data for {0}")]
    NotFound(IpAddr),

    #[error("geolocation is disabled")]
    Disabled,

    #[error("geolocation database lookup failed: {0}")]
    Database(String),

    #[error("remote lookup failed: {0}")]
    Remote(#[from] reqwest::Error),
}

impl LookupError {
    /// Whether a retry could give a different answer.
    ///
    /// Only definitive misses are worth caching.
    pub fn is_transient(&self) -> bool {
        matches!(self, LookupError::Database(_) | LookupError::Remote(_))
    }
}
