// Mon Oct 19 2026 - Alex

use crate::config::Config;
use crate::pipeline::{BatchFetcher, ItemProcessor, PipelineDriver, PipelineError};
use crate::resolver::{ArgumentResolver, RawArguments};

/// Root of the harvest: resolves the arguments and drives the pipeline.
///
/// Front ends slot in by building `RawArguments` (or a JSON object of the
/// `MAINARG_*` keys) and calling this. Returns `Ok(true)` on completion,
/// dry runs included.
pub fn run<F, P>(
    config: Option<&Config>,
    raw: &RawArguments,
    fetcher: F,
    processor: P,
) -> Result<bool, PipelineError>
where
    F: BatchFetcher,
    P: ItemProcessor,
{
    run_with(&ArgumentResolver::new(), config, raw, fetcher, processor)
}

pub fn run_with<F, P>(
    resolver: &ArgumentResolver,
    config: Option<&Config>,
    raw: &RawArguments,
    fetcher: F,
    processor: P,
) -> Result<bool, PipelineError>
where
    F: BatchFetcher,
    P: ItemProcessor,
{
    if raw.precalculated_sources.is_some() || raw.dry_run.is_some() {
        log::warn!("precalculated_sources and dry_run are read from the configuration; argument values ignored");
    }

    let args = resolver.resolve(config, Some(raw));
    log::debug!("Resolved arguments: {:?}", args);

    PipelineDriver::new(fetcher, processor).run(&args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{Batch, BatchStream, FetchRequest, SourceItem};
    use std::cell::RefCell;

    #[test]
    fn test_dry_run_config_skips_collaborators() {
        let fetched = RefCell::new(0);
        let processed = RefCell::new(0);
        let config = Config::new().with_dry_run(true);

        let ok = run(
            Some(&config),
            &RawArguments::new(),
            |_: &FetchRequest| -> anyhow::Result<BatchStream<'static>> {
                *fetched.borrow_mut() += 1;
                Ok(BatchStream::empty())
            },
            |_: &str, _: &str, _: &str| -> anyhow::Result<()> {
                *processed.borrow_mut() += 1;
                Ok(())
            },
        )
        .unwrap();

        assert!(ok);
        assert_eq!(*fetched.borrow(), 0);
        assert_eq!(*processed.borrow(), 0);
    }

    #[test]
    fn test_accession_numbers_bypass_search() {
        let fetched = RefCell::new(0);
        let processed = RefCell::new(Vec::new());
        let config = Config::new().with_accession("k1", SourceItem::new("addr1", "f1"));

        let ok = run(
            Some(&config),
            &RawArguments::new(),
            |_: &FetchRequest| -> anyhow::Result<BatchStream<'static>> {
                *fetched.borrow_mut() += 1;
                Ok(BatchStream::empty())
            },
            |backend: &str, addr: &str, fname: &str| -> anyhow::Result<()> {
                processed
                    .borrow_mut()
                    .push(format!("{}:{}:{}", backend, addr, fname));
                Ok(())
            },
        )
        .unwrap();

        assert!(ok);
        assert_eq!(*fetched.borrow(), 0);
        assert_eq!(*processed.borrow(), vec!["local:addr1:f1".to_string()]);
    }

    #[test]
    fn test_search_uses_resolved_request() {
        let requests = RefCell::new(Vec::new());
        let processed = RefCell::new(Vec::new());
        let raw = RawArguments::new()
            .with_query(["breast", "cancer"])
            .with_organism("human")
            .with_batch_size(0)
            .with_backend("remote");

        let ok = run(
            None,
            &raw,
            |req: &FetchRequest| -> anyhow::Result<BatchStream<'static>> {
                requests.borrow_mut().push(req.clone());
                Ok(BatchStream::from_batches(vec![
                    Batch::single("1", SourceItem::new("a1", "f1"))
                        .with_item("2", SourceItem::new("a2", "f2")),
                    Batch::single("3", SourceItem::new("a3", "f3")),
                ]))
            },
            |backend: &str, addr: &str, _: &str| -> anyhow::Result<usize> {
                processed.borrow_mut().push((backend.to_string(), addr.to_string()));
                Ok(addr.len())
            },
        )
        .unwrap();

        assert!(ok);
        assert_eq!(
            *requests.borrow(),
            vec![FetchRequest::new(
                "breast+AND+cancer+AND+human[Organism]+AND+csv[Supplementary Files]",
                "gds",
                1
            )]
        );
        let addresses: Vec<String> = processed.borrow().iter().map(|(_, a)| a.clone()).collect();
        assert_eq!(addresses, vec!["a1", "a2", "a3"]);
        assert!(processed.borrow().iter().all(|(b, _)| b == "remote"));
    }

    #[test]
    fn test_processing_error_surfaces() {
        let config = Config::new().with_accession("k1", SourceItem::new("addr1", "f1"));

        let result = run(
            Some(&config),
            &RawArguments::new(),
            |_: &FetchRequest| -> anyhow::Result<BatchStream<'static>> { Ok(BatchStream::empty()) },
            |_: &str, _: &str, _: &str| -> anyhow::Result<()> { anyhow::bail!("disk full") },
        );

        assert!(matches!(result, Err(PipelineError::ProcessFailed { .. })));
    }
}
