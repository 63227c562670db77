// Mon Oct 19 2026 - Alex

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One fetchable record: where it lives and what to call it once downloaded.
///
/// Serialized as a two-element `[address, filename]` array so that recorded
/// search results and `accession_numbers` maps stay compact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct SourceItem {
    pub address: String,
    pub filename: String,
}

impl SourceItem {
    pub fn new(address: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            filename: filename.into(),
        }
    }
}

impl From<(String, String)> for SourceItem {
    fn from((address, filename): (String, String)) -> Self {
        Self { address, filename }
    }
}

impl From<(&str, &str)> for SourceItem {
    fn from((address, filename): (&str, &str)) -> Self {
        Self::new(address, filename)
    }
}

impl From<SourceItem> for (String, String) {
    fn from(item: SourceItem) -> Self {
        (item.address, item.filename)
    }
}

impl fmt::Display for SourceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.address, self.filename)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    entries: IndexMap<String, SourceItem>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(key: impl Into<String>, item: SourceItem) -> Self {
        let mut batch = Self::new();
        batch.insert(key, item);
        batch
    }

    pub fn insert(&mut self, key: impl Into<String>, item: SourceItem) -> Option<SourceItem> {
        self.entries.insert(key.into(), item)
    }

    pub fn with_item(mut self, key: impl Into<String>, item: SourceItem) -> Self {
        self.insert(key, item);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&SourceItem> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &SourceItem> {
        self.entries.values()
    }
}

impl FromIterator<(String, SourceItem)> for Batch {
    fn from_iter<I: IntoIterator<Item = (String, SourceItem)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<IndexMap<String, SourceItem>> for Batch {
    fn from(entries: IndexMap<String, SourceItem>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for Batch {
    type Item = (String, SourceItem);
    type IntoIter = indexmap::map::IntoIter<String, SourceItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_item_deserializes_from_pair() {
        let item: SourceItem =
            serde_json::from_str(r#"["ftp://example.org/GSE1.csv.gz", "GSE1.csv.gz"]"#).unwrap();

        assert_eq!(item.address, "ftp://example.org/GSE1.csv.gz");
        assert_eq!(item.filename, "GSE1.csv.gz");
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"["ftp://example.org/GSE1.csv.gz","GSE1.csv.gz"]"#
        );
    }

    #[test]
    fn test_batch_preserves_insertion_order() {
        let batch = Batch::new()
            .with_item("z", SourceItem::new("a3", "f3"))
            .with_item("a", SourceItem::new("a1", "f1"))
            .with_item("m", SourceItem::new("a2", "f2"));

        let addresses: Vec<&str> = batch.items().map(|i| i.address.as_str()).collect();
        assert_eq!(addresses, vec!["a3", "a1", "a2"]);
        assert_eq!(batch.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_batch_json_is_a_plain_object() {
        let batch: Batch =
            serde_json::from_str(r#"{"200001": ["addr1", "f1"], "200002": ["addr2", "f2"]}"#).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.get("200002"), Some(&SourceItem::new("addr2", "f2")));
    }
}
