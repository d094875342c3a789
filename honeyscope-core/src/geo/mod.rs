//! IP geolocation.
//!
//! `GeoLookup` is the seam between the pipeline and whatever knows where an IP
//! lives: a local MaxMind database, a remote HTTP service, or nothing at all.
//! Lookup failures never escape the `Enricher`; a connect event whose lookup
//! failed simply stays unenriched.

mod build;
mod cache;
mod enricher;
mod error;
mod maxmind;
mod remote;

#[cfg(test)]
mod tests;

pub use build::build_lookup;
pub use cache::CachedLookup;
pub use enricher::Enricher;
pub use error::LookupError;
pub use maxmind::MaxmindLookup;
pub use remote::{DEFAULT_REMOTE_URL, RemoteLookup};

pub use crate::record::GeoInfo;
use std::net::IpAddr;
use std::sync::Arc;

pub trait GeoLookup: Send + Sync {
    /// Resolve `ip` to a country/ISP pair.
    ///
    /// A successful result always carries at least one field.
    fn lookup(&self, ip: IpAddr) -> Result<GeoInfo, LookupError>;
}

impl<T: GeoLookup + ?Sized> GeoLookup for Arc<T> {
    fn lookup(&self, ip: IpAddr) -> Result<GeoInfo, LookupError> {
        (**self).lookup(ip)
    }
}

/// Backend used when geolocation is turned off. Every lookup misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledLookup;

impl GeoLookup for DisabledLookup {
    fn lookup(&self, _ip: IpAddr) -> Result<GeoInfo, LookupError> {
        Err(LookupError::Disabled)
    }
}
