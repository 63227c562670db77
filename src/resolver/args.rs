// Mon Oct 19 2026 - Alex

use crate::constants::MAINARG_KEYS;
use crate::pipeline::SourceItem;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caller-supplied parameters. Every key is optional and a JSON `null` is
/// the same as leaving the key out.
///
/// `precalculated_sources` and `dry_run` are accepted for interface
/// compatibility but resolution reads both from the configuration only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawArguments {
    pub database: Option<String>,
    pub query: Option<Vec<String>>,
    pub organism: Option<String>,
    pub batch_size: Option<i64>,
    pub backend: Option<String>,
    pub precalculated_sources: Option<IndexMap<String, SourceItem>>,
    pub dry_run: Option<bool>,
}

#[derive(Error, Debug)]
pub enum ArgumentError {
    #[error("Unknown argument '{0}'")]
    UnknownKey(String),
    #[error("Invalid arguments: {0}")]
    Invalid(String),
}

impl RawArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds arguments from a JSON object keyed by the `MAINARG_*` names.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ArgumentError> {
        if let Some(map) = value.as_object() {
            if let Some(unknown) = map.keys().find(|k| !MAINARG_KEYS.contains(&k.as_str())) {
                return Err(ArgumentError::UnknownKey(unknown.clone()));
            }
        }

        serde_json::from_value(value).map_err(|e| ArgumentError::Invalid(e.to_string()))
    }

    pub fn with_database(mut self, database: &str) -> Self {
        self.database = Some(database.to_string());
        self
    }

    pub fn with_query<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query = Some(fragments.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_organism(mut self, organism: &str) -> Self {
        self.organism = Some(organism.to_string());
        self
    }

    pub fn with_batch_size(mut self, batch_size: i64) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    pub fn with_backend(mut self, backend: &str) -> Self {
        self.backend = Some(backend.to_string());
        self
    }

    pub fn with_precalculated_sources(mut self, sources: IndexMap<String, SourceItem>) -> Self {
        self.precalculated_sources = Some(sources);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }
}
