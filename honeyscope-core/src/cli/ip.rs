use crate::cli::print_json;
use crate::conf::load_config;
use crate::geo::RemoteLookup;
use anyhow::Context;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Print the remote service's full answer for `addr`.
pub fn ip(addr: IpAddr, path: PathBuf) -> anyhow::Result<()> {
    let cfg = load_config(&path)?;

    let remote = RemoteLookup::new(
        &cfg.geoip.remote_url,
        Duration::from_millis(cfg.geoip.timeout_ms),
    )?;

    let info = remote
        .ip_info(addr)
        .with_context(|| format!("ip lookup failed for {addr}"))?;

    print_json(&info)
}
