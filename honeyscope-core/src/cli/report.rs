use crate::cli::{load_table, print_json, print_yaml};
use crate::conf::load_config;
use crate::present::{Dashboard, DashboardLimits, render_dashboard};
use std::path::PathBuf;

/// Build the dataset once and print the dashboard.
pub fn report(path: PathBuf, json: bool, yaml: bool) -> anyhow::Result<()> {
    let cfg = load_config(&path)?;
    let (table, ingest) = load_table(&cfg)?;

    if !ingest.skipped.is_empty() {
        tracing::warn!(
            skipped = ingest.skipped.len(),
            loaded = ingest.sources_loaded,
            "some log sources were skipped"
        );
    }

    let dashboard = Dashboard::build(&table, &DashboardLimits::from(&cfg.dashboard));

    if yaml {
        print_yaml(&dashboard)?;
    } else if json {
        print_json(&dashboard)?;
    } else {
        print!("{}", render_dashboard(&dashboard));
    }

    Ok(())
}
