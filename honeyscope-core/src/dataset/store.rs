use crate::dataset::builder::{DatasetBuilder, IngestReport};
use crate::dataset::error::RefreshError;
use crate::dataset::EventTable;
use crate::ingest::LogSources;
use arc_swap::ArcSwap;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Process-wide event table.
///
/// Readers take an `Arc` snapshot and keep it for as long as they like. A
/// refresh builds a brand-new table offline and swaps it in atomically; a
/// failed refresh leaves the current table in place.
pub struct DatasetStore {
    table: ArcSwap<EventTable>,
    builder: DatasetBuilder,
    sources: LogSources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    pub old_records: usize,
    pub new_records: usize,
    pub report: IngestReport,
}

impl DatasetStore {
    pub fn empty(builder: DatasetBuilder, sources: LogSources) -> Self {
        Self {
            table: ArcSwap::from_pointee(EventTable::new()),
            builder,
            sources,
        }
    }

    /// Build the initial table from the log directory.
    ///
    /// Never fails: if ingestion cannot even start, the store begins empty.
    pub fn startup(builder: DatasetBuilder, sources: LogSources) -> Self {
        let store = Self::empty(builder, sources);

        if let Err(e) = store.refresh_all() {
            tracing::error!(error = %e, "startup ingestion failed; starting with an empty table");
        }

        store
    }

    pub fn snapshot(&self) -> Arc<EventTable> {
        self.table.load_full()
    }

    pub fn sources(&self) -> &LogSources {
        &self.sources
    }

    /// Rebuild from every source in the log directory.
    ///
    /// Individual bad sources are skipped; only a failure to enumerate the
    /// directory aborts the refresh.
    pub fn refresh_all(&self) -> Result<RefreshSummary, RefreshError> {
        let (table, report) =
            self.builder
                .build_dir(&self.sources)
                .map_err(|source| RefreshError::Directory {
                    dir: self.sources.dir.clone(),
                    source,
                })?;

        Ok(self.swap(table, report))
    }

    /// Replace the table with the contents of one named source.
    ///
    /// Any read or parse error aborts the refresh.
    pub fn refresh_source(&self, path: &Path) -> Result<RefreshSummary, RefreshError> {
        let table = self
            .builder
            .load_source(path)
            .map_err(|source| RefreshError::Source {
                path: path.to_path_buf(),
                source,
            })?;

        let report = IngestReport {
            sources_loaded: 1,
            records: table.len(),
            skipped: Vec::new(),
        };

        Ok(self.swap(table, report))
    }

    fn swap(&self, table: EventTable, report: IngestReport) -> RefreshSummary {
        let new_records = table.len();

        // Atomic swap (point of no return).
        let old = self.table.swap(Arc::new(table));

        tracing::info!(
            old_records = old.len(),
            new_records,
            "event table replaced"
        );

        RefreshSummary {
            old_records: old.len(),
            new_records,
            report,
        }
    }
}
