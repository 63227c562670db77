// Mon Oct 19 2026 - Alex

use crate::constants::{ENTRY_TYPE_TAG, FILE_FORMAT_TAG, ORGANISM_TAG, QUERY_SEPARATOR};

/// The four pieces of a search term, in the order they are joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTerms {
    pub free_text: Option<String>,
    pub organism: Option<String>,
    pub entry_type: Option<String>,
    pub file_format: Option<String>,
}

impl QueryTerms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_free_text(mut self, text: Option<String>) -> Self {
        self.free_text = text;
        self
    }

    pub fn with_organism(mut self, organism: Option<String>) -> Self {
        self.organism = organism;
        self
    }

    pub fn with_entry_type(mut self, entry_type: Option<String>) -> Self {
        self.entry_type = entry_type;
        self
    }

    pub fn with_file_format(mut self, file_format: Option<String>) -> Self {
        self.file_format = file_format;
        self
    }

    pub fn organism_filter(&self) -> Option<String> {
        tagged(self.organism.as_deref(), ORGANISM_TAG)
    }

    pub fn entry_type_filter(&self) -> Option<String> {
        tagged(self.entry_type.as_deref(), ENTRY_TYPE_TAG)
    }

    pub fn file_format_filter(&self) -> Option<String> {
        tagged(self.file_format.as_deref(), FILE_FORMAT_TAG)
    }

    /// Joins the present pieces with `+AND+`. Absent or empty pieces are
    /// skipped entirely, so no doubled separators appear.
    pub fn render(&self) -> String {
        let pieces = [
            self.free_text.clone(),
            self.organism_filter(),
            self.entry_type_filter(),
            self.file_format_filter(),
        ];

        pieces
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(QUERY_SEPARATOR)
    }
}

pub fn join_fragments(fragments: &[String]) -> Option<String> {
    if fragments.is_empty() {
        return None;
    }
    Some(fragments.join(QUERY_SEPARATOR))
}

fn tagged(value: Option<&str>, tag: &str) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| format!("{}{}", v, tag))
}
