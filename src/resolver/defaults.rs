// Mon Oct 19 2026 - Alex

use crate::constants::{BACKEND_LOCAL, DEFAULT_DB_VALUE, DEFAULT_FILE_FORMAT, DEFAULT_SEARCH_INCREMENT};

/// Terminal fallbacks for every resolved field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverDefaults {
    pub database: String,
    pub batch_size: i64,
    pub backend: String,
    pub file_format: String,
}

impl Default for ResolverDefaults {
    fn default() -> Self {
        Self {
            database: DEFAULT_DB_VALUE.to_string(),
            batch_size: DEFAULT_SEARCH_INCREMENT,
            backend: BACKEND_LOCAL.to_string(),
            file_format: DEFAULT_FILE_FORMAT.to_string(),
        }
    }
}

impl ResolverDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_database(mut self, database: &str) -> Self {
        self.database = database.to_string();
        self
    }

    pub fn with_batch_size(mut self, batch_size: i64) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_backend(mut self, backend: &str) -> Self {
        self.backend = backend.to_string();
        self
    }

    pub fn with_file_format(mut self, file_format: &str) -> Self {
        self.file_format = file_format.to_string();
        self
    }
}
