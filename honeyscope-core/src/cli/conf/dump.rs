use crate::conf::{HoneyscopeConfig, load_config};
use std::path::PathBuf;

/// Print the resolved configuration, defaults and absolute paths included.
pub fn dump(path: PathBuf, yaml: bool) -> anyhow::Result<()> {
    let cfg = load_config(&path)?;
    println!("{}", render_dump(&cfg, yaml)?);
    Ok(())
}

/// JSON unless YAML was asked for.
pub fn render_dump(cfg: &HoneyscopeConfig, yaml: bool) -> anyhow::Result<String> {
    if yaml {
        Ok(serde_yaml::to_string(cfg)?)
    } else {
        Ok(serde_json::to_string_pretty(cfg)?)
    }
}
