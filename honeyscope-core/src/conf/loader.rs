use crate::conf::error::ConfigError;
use crate::conf::types::{GeoBackend, HoneyscopeConfig};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "honeyscope.hcl";

/// Load `honeyscope.hcl` from the `root` config directory.
///
/// Relative paths inside the file are resolved against `root`, then the
/// result is validated.
pub fn load_config(root: &Path) -> Result<HoneyscopeConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    let raw = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;

    let mut cfg = parse_config(&path, &raw)?;
    resolve_paths(&mut cfg, root);
    validate_config(&cfg)?;

    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(cfg)
}

pub fn parse_config(path: &Path, raw: &str) -> Result<HoneyscopeConfig, ConfigError> {
    hcl::from_str(raw).map_err(|e| ConfigError::parse(path, e))
}

pub fn validate_config(cfg: &HoneyscopeConfig) -> Result<(), ConfigError> {
    glob::Pattern::new(&cfg.logs.pattern).map_err(|e| ConfigError::Glob {
        pattern: cfg.logs.pattern.clone(),
        source: e,
    })?;

    if cfg.logs.workers == 0 {
        return Err(ConfigError::ZeroWorkers);
    }

    match cfg.geoip.backend {
        GeoBackend::Maxmind if cfg.geoip.city_db.is_none() => {
            return Err(ConfigError::MissingCityDb);
        }
        GeoBackend::Remote if !cfg.geoip.remote_url.contains("{ip}") => {
            return Err(ConfigError::MissingIpPlaceholder {
                url: cfg.geoip.remote_url.clone(),
            });
        }
        GeoBackend::Remote if cfg.geoip.timeout_ms == 0 => {
            return Err(ConfigError::ZeroTimeout);
        }
        _ => {}
    }

    Ok(())
}

fn resolve_paths(cfg: &mut HoneyscopeConfig, root: &Path) {
    cfg.logs.dir = resolve(root, &cfg.logs.dir);

    if let Some(p) = cfg.logs.refresh_source.as_mut() {
        *p = resolve(root, p);
    }
    if let Some(p) = cfg.geoip.city_db.as_mut() {
        *p = resolve(root, p);
    }
    if let Some(p) = cfg.geoip.isp_db.as_mut() {
        *p = resolve(root, p);
    }
    if let Some(p) = cfg.dashboard.output.as_mut() {
        *p = resolve(root, p);
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
