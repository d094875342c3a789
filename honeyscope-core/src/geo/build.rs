use crate::conf::{GeoBackend, GeoIpConfig};
use crate::geo::{CachedLookup, DisabledLookup, GeoLookup, MaxmindLookup, RemoteLookup};
use anyhow::anyhow;
use std::sync::Arc;
use std::time::Duration;

/// Build the configured lookup backend, wrapped in a cache when enabled.
///
/// An unreadable MaxMind database degrades to `DisabledLookup`.
pub fn build_lookup(cfg: &GeoIpConfig) -> anyhow::Result<Arc<dyn GeoLookup>> {
    let lookup = match cfg.backend {
        GeoBackend::Maxmind => {
            let city_db = cfg
                .city_db
                .as_deref()
                .ok_or_else(|| anyhow!("geoip backend 'maxmind' requires 'city_db'"))?;
            match MaxmindLookup::open(city_db, cfg.isp_db.as_deref()) {
                Ok(lookup) => with_cache(lookup, cfg.cache),
                Err(e) => {
                    tracing::warn!(
                        city_db = %city_db.display(),
                        error = %e,
                        "failed to open geoip database; connects stay unenriched"
                    );
                    Arc::new(DisabledLookup) as Arc<dyn GeoLookup>
                }
            }
        }
        GeoBackend::Remote => {
            let lookup =
                RemoteLookup::new(&cfg.remote_url, Duration::from_millis(cfg.timeout_ms))?;
            with_cache(lookup, cfg.cache)
        }
        GeoBackend::Disabled => Arc::new(DisabledLookup) as Arc<dyn GeoLookup>,
    };

    tracing::debug!(backend = ?cfg.backend, cache = cfg.cache, "geo lookup ready");
    Ok(lookup)
}

fn with_cache<L: GeoLookup + 'static>(lookup: L, cache: bool) -> Arc<dyn GeoLookup> {
    if cache {
        Arc::new(CachedLookup::new(lookup))
    } else {
        Arc::new(lookup)
    }
}
