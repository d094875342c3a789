use crate::geo::{GeoInfo, GeoLookup, LookupError};
use ahash::RandomState;
use dashmap::DashMap;
use std::net::IpAddr;

/// In-memory lookup cache keyed by IP.
///
/// Hits and definitive misses are remembered for the life of the process, so
/// a rebuild never asks the backend about the same address twice. Transient
/// failures (timeouts, I/O) are not cached.
pub struct CachedLookup<L> {
    inner: L,
    entries: DashMap<IpAddr, Option<GeoInfo>, RandomState>,
}

impl<L: GeoLookup> CachedLookup<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            entries: DashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: GeoLookup> GeoLookup for CachedLookup<L> {
    fn lookup(&self, ip: IpAddr) -> Result<GeoInfo, LookupError> {
        if let Some(entry) = self.entries.get(&ip) {
            return entry.clone().ok_or(LookupError::NotFound(ip));
        }

        // No shard lock may be held across the backend call.
        let result = self.inner.lookup(ip);
        match &result {
            Ok(geo) => {
                self.entries.insert(ip, Some(geo.clone()));
            }
            Err(e) if !e.is_transient() => {
                self.entries.insert(ip, None);
            }
            Err(_) => {}
        }

        result
    }
}
