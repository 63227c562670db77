// Mon Oct 19 2026 - Alex

use crate::pipeline::source::{Batch, SourceItem};
use indexmap::IndexMap;

/// Single-pass, forward-only producer of batches.
///
/// The stream ends at the first `None` from the underlying iterator or the
/// first empty batch, whichever comes first. Once ended it stays ended.
pub struct BatchStream<'a> {
    inner: Box<dyn Iterator<Item = anyhow::Result<Batch>> + 'a>,
    exhausted: bool,
    pulled: usize,
}

impl<'a> BatchStream<'a> {
    pub fn from_results<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = anyhow::Result<Batch>>,
        I::IntoIter: 'a,
    {
        Self {
            inner: Box::new(iter.into_iter()),
            exhausted: false,
            pulled: 0,
        }
    }

    pub fn from_batches<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Batch>,
        I::IntoIter: 'a,
    {
        Self::from_results(batches.into_iter().map(Ok))
    }

    pub fn empty() -> Self {
        Self::from_batches(std::iter::empty())
    }

    pub fn next_batch(&mut self) -> anyhow::Result<Option<Batch>> {
        if self.exhausted {
            return Ok(None);
        }

        match self.inner.next() {
            Some(Ok(batch)) if !batch.is_empty() => {
                self.pulled += 1;
                Ok(Some(batch))
            }
            Some(Ok(_)) | None => {
                self.exhausted = true;
                Ok(None)
            }
            Some(Err(e)) => {
                self.exhausted = true;
                Err(e)
            }
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn batches_pulled(&self) -> usize {
        self.pulled
    }
}

impl BatchStream<'static> {
    /// One single-entry batch per source, in map order.
    pub fn precalculated(sources: &IndexMap<String, SourceItem>) -> Self {
        let batches: Vec<Batch> = sources
            .iter()
            .map(|(key, item)| Batch::single(key.clone(), item.clone()))
            .collect();

        Self::from_batches(batches)
    }
}

impl Iterator for BatchStream<'_> {
    type Item = anyhow::Result<Batch>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_batch().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(key: &str) -> Batch {
        Batch::single(key, SourceItem::new(format!("addr-{}", key), format!("{}.csv", key)))
    }

    #[test]
    fn test_stream_stops_at_empty_batch() {
        let mut stream = BatchStream::from_batches(vec![batch("a"), Batch::new(), batch("b")]);

        assert!(stream.next_batch().unwrap().is_some());
        assert!(stream.next_batch().unwrap().is_none());
        assert!(stream.is_exhausted());
        assert!(stream.next_batch().unwrap().is_none());
        assert_eq!(stream.batches_pulled(), 1);
    }

    #[test]
    fn test_stream_latches_after_error() {
        let items: Vec<anyhow::Result<Batch>> =
            vec![Err(anyhow::anyhow!("page 1 timed out")), Ok(batch("late"))];
        let mut stream = BatchStream::from_results(items);

        let err = stream.next_batch().unwrap_err();
        assert!(err.to_string().contains("timed out"));
        assert!(stream.next_batch().unwrap().is_none());
    }

    #[test]
    fn test_precalculated_makes_one_batch_per_source() {
        let mut sources = IndexMap::new();
        sources.insert("k2".to_string(), SourceItem::new("a2", "f2"));
        sources.insert("k1".to_string(), SourceItem::new("a1", "f1"));

        let batches: Vec<Batch> = BatchStream::precalculated(&sources)
            .collect::<anyhow::Result<_>>()
            .unwrap();

        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.len() == 1));
        assert_eq!(batches[0].get("k2"), Some(&SourceItem::new("a2", "f2")));
        assert_eq!(batches[1].get("k1"), Some(&SourceItem::new("a1", "f1")));
    }

    #[test]
    fn test_empty_stream() {
        let mut stream = BatchStream::empty();
        assert!(stream.next_batch().unwrap().is_none());
        assert_eq!(stream.count(), 0);
    }
}
