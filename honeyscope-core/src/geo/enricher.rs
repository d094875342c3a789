use crate::geo::{DisabledLookup, GeoLookup, LookupError};
use crate::record::{EventKind, EventRecord};
use std::net::IpAddr;
use std::sync::Arc;

/// Annotates connect events with country/ISP data.
///
/// Cheap to clone and safe to share across ingest workers.
#[derive(Clone)]
pub struct Enricher {
    lookup: Arc<dyn GeoLookup>,
}

impl Enricher {
    pub fn new(lookup: Arc<dyn GeoLookup>) -> Self {
        Self { lookup }
    }

    pub fn disabled() -> Self {
        Self::new(Arc::new(DisabledLookup))
    }

    /// Returns the record with enrichment applied.
    ///
    /// Anything but a connect event comes back untouched. A failed lookup
    /// leaves `geo` unset; the record is always kept.
    pub fn enrich(&self, mut record: EventRecord) -> EventRecord {
        let EventKind::Connect { src_ip, geo } = &mut record.kind else {
            return record;
        };

        let result = src_ip
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| LookupError::InvalidIp(src_ip.clone()))
            .and_then(|ip| self.lookup.lookup(ip));

        *geo = match result {
            Ok(info) if info.has_some_info() => Some(info),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(src_ip = %src_ip, error = %e, "geo lookup failed");
                None
            }
        };

        record
    }
}

impl std::fmt::Debug for Enricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enricher").finish_non_exhaustive()
    }
}
