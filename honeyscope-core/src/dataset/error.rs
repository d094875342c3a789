use crate::ingest::IngestError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("failed to refresh from log directory {dir}")]
    Directory {
        dir: PathBuf,
        #[source]
        source: IngestError,
    },

    #[error("failed to refresh from log source {path}")]
    Source {
        path: PathBuf,
        #[source]
        source: IngestError,
    },
}
