// Mon Oct 19 2026 - Alex

use crate::pipeline::{Batch, BatchFetcher, BatchStream, FetchRequest, SourceItem};
use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Recorded search results: either explicit pages, or one flat listing that
/// is paged by the requested batch size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Recording {
    Pages(Vec<Batch>),
    Listing(IndexMap<String, SourceItem>),
}

/// Replays a saved search instead of querying the remote source.
#[derive(Debug, Clone)]
pub struct RecordedFetcher {
    recording: Recording,
    requests: Vec<FetchRequest>,
}

impl RecordedFetcher {
    pub fn new(recording: Recording) -> Self {
        Self {
            recording,
            requests: Vec::new(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read recorded batches from {}", path.display()))?;
        let recording: Recording = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid recorded batches in {}", path.display()))?;

        log::info!("Loaded recording from {}", path.display());
        Ok(Self::new(recording))
    }

    pub fn requests(&self) -> &[FetchRequest] {
        &self.requests
    }
}

impl BatchFetcher for RecordedFetcher {
    fn fetch_all(&mut self, request: &FetchRequest) -> anyhow::Result<BatchStream<'_>> {
        log::debug!(
            "Replaying recording for term={} db={} batch_size={}",
            request.term,
            request.db,
            request.batch_size
        );
        self.requests.push(request.clone());

        let stream = match &self.recording {
            Recording::Pages(pages) => BatchStream::from_batches(pages.iter().cloned()),
            Recording::Listing(items) => {
                let size = request.batch_size.max(1);
                let entries: Vec<(&String, &SourceItem)> = items.iter().collect();
                BatchStream::from_batches(entries.chunks(size).map(|chunk| {
                    chunk
                        .iter()
                        .map(|(k, v)| ((*k).clone(), (*v).clone()))
                        .collect::<Batch>()
                }).collect::<Vec<_>>())
            }
        };

        Ok(stream)
    }
}
