use crate::geo::{GeoInfo, GeoLookup, LookupError};
use maxminddb::PathElement;
use std::net::IpAddr;
use std::path::Path;

/// Lookup backed by local MaxMind databases.
///
/// The city (or country) database provides `country_short`; the optional ISP
/// or ASN database provides `isp`.
pub struct MaxmindLookup {
    city_reader: maxminddb::Reader<maxminddb::Mmap>,
    isp_reader: Option<maxminddb::Reader<maxminddb::Mmap>>,
}

impl MaxmindLookup {
    pub fn open(city_db: &Path, isp_db: Option<&Path>) -> anyhow::Result<Self> {
        // Safety note on these memory-mapped GeoIP files...
        // - File is opened read-only
        // - Lifetime is bound to MaxmindLookup
        // - honeyscope never mutates the mmdb file
        let city_reader = unsafe { maxminddb::Reader::open_mmap(city_db)? };

        let isp_reader = match isp_db {
            Some(path) => Some(unsafe { maxminddb::Reader::open_mmap(path)? }),
            None => None,
        };

        tracing::info!(
            city_db = %city_db.display(),
            isp_db = ?isp_db.map(Path::display),
            "opened geoip databases"
        );

        Ok(Self {
            city_reader,
            isp_reader,
        })
    }
}

impl GeoLookup for MaxmindLookup {
    fn lookup(&self, ip: IpAddr) -> Result<GeoInfo, LookupError> {
        // An IPv4-only database cannot answer for IPv6 peers; that is a miss,
        // not a database failure.
        if !ip_fits(self.city_reader.metadata.ip_version, ip) {
            return Err(LookupError::NotFound(ip));
        }

        let mut geo = GeoInfo::default();

        //---------------------------------------------------------------------
        // Country
        //---------------------------------------------------------------------
        let lookup = self
            .city_reader
            .lookup(ip)
            .map_err(|e| LookupError::Database(e.to_string()))?;

        geo.country_short = lookup
            .decode_path::<String>(&[PathElement::Key("country"), PathElement::Key("iso_code")])
            .ok()
            .flatten();

        //---------------------------------------------------------------------
        // ISP
        //---------------------------------------------------------------------
        let lookup = self
            .isp_reader
            .as_ref()
            .and_then(|reader| reader.lookup(ip).ok());

        if let Some(lookup) = lookup {
            // GeoIP2-ISP carries `isp`; GeoLite2-ASN only has the AS organization.
            geo.isp = lookup
                .decode_path::<String>(&[PathElement::Key("isp")])
                .ok()
                .flatten()
                .or_else(|| {
                    lookup
                        .decode_path::<String>(&[PathElement::Key(
                            "autonomous_system_organization",
                        )])
                        .ok()
                        .flatten()
                });
        }

        if geo.has_some_info() {
            Ok(geo)
        } else {
            Err(LookupError::NotFound(ip))
        }
    }
}

/// Whether a database built for `ip_version` can be searched for `ip`.
pub(crate) fn ip_fits(ip_version: u16, ip: IpAddr) -> bool {
    ip_version == 6 || ip.is_ipv4()
}
