use crate::cli::build_store;
use crate::cli::reload::ReloadHandle;
use crate::conf::load_config;
use crate::dataset::{DatasetStore, EventTable, RefreshSummary};
use crate::present::{Dashboard, DashboardLimits};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

struct ServeState {
    store: DatasetStore,
    limits: DashboardLimits,
    output: Option<PathBuf>,
    refresh_source: Option<PathBuf>,
}

/// Build the dataset, publish the dashboard, then refresh on every SIGHUP
/// until interrupted.
pub fn serve(path: PathBuf) -> Result<()> {
    use tokio::runtime::Builder;

    let cfg = load_config(&path)?;

    // Initial build happens before the runtime exists: remote lookups block.
    let state = Arc::new(ServeState {
        store: build_store(&cfg)?,
        limits: DashboardLimits::from(&cfg.dashboard),
        output: cfg.dashboard.output.clone(),
        refresh_source: cfg.logs.refresh_source.clone(),
    });

    publish_dashboard(&state.store.snapshot(), &state.limits, state.output.as_deref())?;

    let control_rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build control-plane Tokio runtime")?;

    control_rt.block_on(reload_loop(state))
}

async fn reload_loop(state: Arc<ServeState>) -> Result<()> {
    let reload = ReloadHandle::new();
    let mut reload_rx = reload.subscribe();

    tokio::spawn({
        let reload = reload.clone();
        async move {
            if let Err(e) = reload.forward_sighup().await {
                tracing::error!(error = %e, "failed to install SIGHUP handler");
            }
        }
    });

    tracing::info!("reload loop started");

    loop {
        tokio::select! {
            changed = reload_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let epoch = *reload_rx.borrow_and_update();
                tracing::info!(epoch, "refresh requested");

                let state = state.clone();
                match tokio::task::spawn_blocking(move || refresh_and_publish(&state)).await {
                    Ok(Ok(summary)) => tracing::info!(
                        old_records = summary.old_records,
                        new_records = summary.new_records,
                        skipped = summary.report.skipped.len(),
                        "refresh successful"
                    ),
                    Ok(Err(e)) => tracing::error!(
                        error = %format!("{e:#}"),
                        "refresh failed; keeping previous event table"
                    ),
                    Err(e) => tracing::error!(error = %e, "refresh task panicked"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutdown requested");
                break;
            }
        }
    }

    Ok(())
}

fn refresh_and_publish(state: &ServeState) -> Result<RefreshSummary> {
    let summary = match &state.refresh_source {
        Some(source) => state.store.refresh_source(source)?,
        None => state.store.refresh_all()?,
    };

    publish_dashboard(&state.store.snapshot(), &state.limits, state.output.as_deref())?;
    Ok(summary)
}

/// Write the dashboard JSON to `output`, or stdout when unset.
///
/// The file is replaced through a sibling temp file so readers never see a
/// partial document.
pub fn publish_dashboard(
    table: &EventTable,
    limits: &DashboardLimits,
    output: Option<&Path>,
) -> Result<()> {
    let dashboard = Dashboard::build(table, limits);
    let json = serde_json::to_string_pretty(&dashboard)?;

    match output {
        Some(path) => {
            let tmp = path.with_extension("tmp");
            fs::write(&tmp, json)
                .with_context(|| format!("failed to write {}", tmp.display()))?;
            fs::rename(&tmp, path)
                .with_context(|| format!("failed to replace {}", path.display()))?;
            tracing::info!(output = %path.display(), events = table.len(), "dashboard published");
        }
        None => println!("{json}"),
    }

    Ok(())
}
