use crate::dataset::EventTable;
use crate::geo::Enricher;
use crate::ingest::{IngestError, LogSources, discover_sources, read_source};
use crate::record::parse_source;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::thread;

/// Turns log sources into an `EventTable`: read, parse, enrich, concatenate.
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    enricher: Enricher,
    workers: usize,
}

/// What happened during a batch build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub sources_loaded: usize,
    pub records: usize,
    pub skipped: Vec<SkippedSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub reason: String,
}

impl IngestReport {
    fn merge(&mut self, other: IngestReport) {
        self.sources_loaded += other.sources_loaded;
        self.records += other.records;
        self.skipped.extend(other.skipped);
    }
}

impl DatasetBuilder {
    pub fn new(enricher: Enricher) -> Self {
        Self {
            enricher,
            workers: 1,
        }
    }

    /// Number of worker threads for batch builds. Values below 1 mean 1.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Load exactly one named source. Any failure is surfaced to the caller.
    pub fn load_source(&self, path: &Path) -> Result<EventTable, IngestError> {
        let contents = read_source(path)?;
        let records = parse_source(&source_name(path), &contents)?;

        Ok(records
            .into_iter()
            .map(|r| self.enricher.enrich(r))
            .collect())
    }

    /// Discover and load every log file in a directory.
    ///
    /// A missing directory gives an empty table. Only a bad glob pattern is an
    /// error; unreadable or malformed files are skipped and reported.
    pub fn build_dir(
        &self,
        sources: &LogSources,
    ) -> Result<(EventTable, IngestReport), IngestError> {
        let paths = discover_sources(sources)?;
        Ok(self.build(&paths))
    }

    /// Load many sources, skipping (and reporting) the ones that fail.
    ///
    /// With more than one worker the sources are split into disjoint
    /// contiguous groups, one scoped thread per group. The partial tables are
    /// concatenated in group order once every worker has finished.
    pub fn build(&self, sources: &[PathBuf]) -> (EventTable, IngestReport) {
        let groups = partition(sources, self.workers);

        let (table, report) = if groups.len() <= 1 {
            self.build_group(sources)
        } else {
            let partials: Vec<_> = thread::scope(|s| {
                let handles: Vec<_> = groups
                    .iter()
                    .map(|group| s.spawn(move || self.build_group(group)))
                    .collect();

                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                    .collect()
            });

            let mut table = EventTable::new();
            let mut report = IngestReport::default();
            for (partial, partial_report) in partials {
                table.append(partial);
                report.merge(partial_report);
            }
            (table, report)
        };

        tracing::info!(
            sources = sources.len(),
            loaded = report.sources_loaded,
            skipped = report.skipped.len(),
            records = report.records,
            workers = groups.len().max(1),
            "dataset built"
        );

        (table, report)
    }

    fn build_group(&self, group: &[PathBuf]) -> (EventTable, IngestReport) {
        let mut table = EventTable::new();
        let mut report = IngestReport::default();

        for path in group {
            match self.load_source(path) {
                Ok(partial) => {
                    tracing::debug!(path = %path.display(), records = partial.len(), "source loaded");
                    report.sources_loaded += 1;
                    report.records += partial.len();
                    table.append(partial);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping log source");
                    report.skipped.push(SkippedSource {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        (table, report)
    }
}

/// Split `items` into at most `n` contiguous groups whose sizes differ by at
/// most one. Empty groups are never produced.
pub fn partition<T>(items: &[T], n: usize) -> Vec<&[T]> {
    let n = n.clamp(1, items.len().max(1));
    let base = items.len() / n;
    let extra = items.len() % n;

    let mut groups = Vec::with_capacity(n);
    let mut start = 0;
    for i in 0..n {
        let size = base + usize::from(i < extra);
        if size == 0 {
            continue;
        }
        groups.push(&items[start..start + size]);
        start += size;
    }
    groups
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
