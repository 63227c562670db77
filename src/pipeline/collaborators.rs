// Mon Oct 19 2026 - Alex

use crate::pipeline::stream::BatchStream;
use crate::resolver::CanonicalArguments;
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub term: String,
    pub db: String,
    pub batch_size: usize,
}

impl FetchRequest {
    pub fn new(term: impl Into<String>, db: impl Into<String>, batch_size: usize) -> Self {
        Self {
            term: term.into(),
            db: db.into(),
            batch_size: batch_size.max(1),
        }
    }
}

impl From<&CanonicalArguments> for FetchRequest {
    fn from(args: &CanonicalArguments) -> Self {
        Self::new(args.query.clone(), args.database.clone(), args.batch_size)
    }
}

/// Produces the paged search results for a query.
///
/// Errors may surface either from the call itself or from advancing the
/// returned stream; the driver propagates both.
pub trait BatchFetcher {
    fn fetch_all(&mut self, request: &FetchRequest) -> anyhow::Result<BatchStream<'_>>;
}

/// Consumes one source item with the named processing backend.
pub trait ItemProcessor {
    type Output: Debug;

    fn process_item(
        &mut self,
        backend: &str,
        address: &str,
        filename: &str,
    ) -> anyhow::Result<Self::Output>;
}

impl<F> BatchFetcher for F
where
    F: FnMut(&FetchRequest) -> anyhow::Result<BatchStream<'static>>,
{
    fn fetch_all(&mut self, request: &FetchRequest) -> anyhow::Result<BatchStream<'_>> {
        self(request)
    }
}

impl<F, O> ItemProcessor for F
where
    F: FnMut(&str, &str, &str) -> anyhow::Result<O>,
    O: Debug,
{
    type Output = O;

    fn process_item(&mut self, backend: &str, address: &str, filename: &str) -> anyhow::Result<O> {
        self(backend, address, filename)
    }
}

/// Fetcher for runs that must never reach the search step, such as
/// precalculated-source or dry runs driven from a front end.
pub struct NoFetch;

impl BatchFetcher for NoFetch {
    fn fetch_all(&mut self, request: &FetchRequest) -> anyhow::Result<BatchStream<'_>> {
        anyhow::bail!(
            "no fetcher configured for query '{}' against '{}'",
            request.term,
            request.db
        )
    }
}
