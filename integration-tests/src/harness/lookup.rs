use honeyscope_core::geo::{GeoInfo, GeoLookup, LookupError};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory lookup table standing in for a MaxMind database.
#[derive(Default)]
pub struct StaticLookup {
    entries: HashMap<IpAddr, GeoInfo>,
    calls: AtomicUsize,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, ip: &str, country: &str, isp: &str) -> Self {
        self.entries.insert(
            ip.parse().expect("invalid fixture ip"),
            GeoInfo {
                country_short: Some(country.to_string()),
                isp: Some(isp.to_string()),
            },
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl GeoLookup for StaticLookup {
    fn lookup(&self, ip: IpAddr) -> Result<GeoInfo, LookupError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.entries
            .get(&ip)
            .cloned()
            .ok_or(LookupError::NotFound(ip))
    }
}
