// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Fetch failed for query '{term}' against '{db}': {source}")]
    FetchFailed {
        term: String,
        db: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("Failed to pull batch {index}: {source}")]
    BatchFailed {
        index: usize,
        #[source]
        source: anyhow::Error,
    },
    #[error("Backend '{backend}' failed on {address} ({filename}): {source}")]
    ProcessFailed {
        backend: String,
        address: String,
        filename: String,
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, PipelineError::FetchFailed { .. } | PipelineError::BatchFailed { .. })
    }

    pub fn is_process_error(&self) -> bool {
        matches!(self, PipelineError::ProcessFailed { .. })
    }
}
