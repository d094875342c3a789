pub mod conf;
mod ip;
mod reload;
mod report;
mod serve;
mod session;

#[cfg(test)]
mod tests;

pub use ip::ip;
pub use report::report;
pub use serve::{publish_dashboard, serve};
pub use session::session;

use crate::conf::HoneyscopeConfig;
use crate::dataset::{DatasetBuilder, DatasetStore, EventTable, IngestReport};
use crate::geo::{Enricher, build_lookup};
use serde::Serialize;

/// Builder wired with the configured lookup backend and worker count.
pub fn build_builder(cfg: &HoneyscopeConfig) -> anyhow::Result<DatasetBuilder> {
    let lookup = build_lookup(&cfg.geoip)?;
    Ok(DatasetBuilder::new(Enricher::new(lookup)).with_workers(cfg.logs.workers))
}

/// Store populated from the configured log directory.
pub fn build_store(cfg: &HoneyscopeConfig) -> anyhow::Result<DatasetStore> {
    Ok(DatasetStore::startup(build_builder(cfg)?, cfg.logs.sources()))
}

/// One-shot directory ingestion for the read-only commands.
fn load_table(cfg: &HoneyscopeConfig) -> anyhow::Result<(EventTable, IngestReport)> {
    let builder = build_builder(cfg)?;
    Ok(builder.build_dir(&cfg.logs.sources())?)
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub(crate) fn print_yaml<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
