use crate::ingest::IngestError;
use glob::{Pattern, glob};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the honeypot logs live and which files count as logs.
#[derive(Debug, Clone)]
pub struct LogSources {
    pub dir: PathBuf,
    pub pattern: String,
    /// Exact file names to skip (e.g. `.DS_Store`).
    pub ignore: Vec<String>,
}

impl LogSources {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            pattern: "*".to_string(),
            ignore: vec![".DS_Store".to_string()],
        }
    }
}

/// Lists the log files under `sources.dir` matching `sources.pattern`.
///
/// A missing directory is not an error: ingestion is optional and the caller
/// simply gets no sources. Hidden files, ignored names and anything that is not
/// a regular file are filtered out. Paths are returned sorted.
///
/// # Errors
///
/// Returns `IngestError::Glob` if the pattern is malformed.
pub fn discover_sources(sources: &LogSources) -> Result<Vec<PathBuf>, IngestError> {
    if !sources.dir.is_dir() {
        tracing::info!(
            dir = %sources.dir.display(),
            "log directory not found; no sources to ingest"
        );
        return Ok(Vec::new());
    }

    let pattern = resolve_glob(&sources.dir, &sources.pattern);
    let mut paths: Vec<_> = glob(&pattern)
        .map_err(|e| IngestError::Glob {
            pattern: pattern.clone(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .filter(|p| !is_ignored(p, &sources.ignore))
        .collect();

    paths.sort();
    Ok(paths)
}

/// Joins `pattern` onto `root`, escaping any glob metacharacters in `root`.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    let root = Pattern::escape(&root.to_string_lossy());
    Path::new(&root).join(pattern).to_string_lossy().into_owned()
}

fn is_ignored(path: &Path, ignore: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return true;
    };

    name.starts_with('.') || ignore.iter().any(|i| i == name)
}

/// Read a source's raw bytes. Decoding is left to the parser so bad bytes are
/// reported per line.
pub fn read_source(path: &Path) -> Result<Vec<u8>, IngestError> {
    fs::read(path).map_err(|e| IngestError::unavailable(path, e))
}
