// Mon Oct 19 2026 - Alex

use crate::pipeline::SourceItem;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fully resolved run parameters. Only `precalculated_sources` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalArguments {
    pub database: String,
    pub query: String,
    pub batch_size: usize,
    pub backend: String,
    pub precalculated_sources: Option<IndexMap<String, SourceItem>>,
    pub dry_run: bool,
}

impl CanonicalArguments {
    pub fn uses_precalculated_sources(&self) -> bool {
        self.precalculated_sources.is_some()
    }

    pub fn source_count(&self) -> Option<usize> {
        self.precalculated_sources.as_ref().map(IndexMap::len)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
