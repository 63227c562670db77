// Mon Oct 19 2026 - Alex

use crate::constants::DRY_RUN_NOTICE;
use crate::pipeline::collaborators::{BatchFetcher, FetchRequest, ItemProcessor};
use crate::pipeline::error::PipelineError;
use crate::pipeline::source::Batch;
use crate::pipeline::stream::BatchStream;
use crate::resolver::CanonicalArguments;
use crate::utils::logging::ScopedTimer;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Fetching,
    Processing,
    Done,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub batches: usize,
    pub items: usize,
    pub elapsed: Duration,
}

pub struct PipelineDriver<F, P> {
    fetcher: F,
    processor: P,
    state: DriverState,
    stats: RunStats,
}

impl<F, P> PipelineDriver<F, P>
where
    F: BatchFetcher,
    P: ItemProcessor,
{
    pub fn new(fetcher: F, processor: P) -> Self {
        Self {
            fetcher,
            processor,
            state: DriverState::Idle,
            stats: RunStats::default(),
        }
    }

    /// Drives one full run. Returns `Ok(true)` once the batch source is
    /// exhausted, or immediately on a dry run. The first fetch or processing
    /// failure aborts the run.
    pub fn run(&mut self, args: &CanonicalArguments) -> Result<bool, PipelineError> {
        self.stats = RunStats::default();

        if args.dry_run {
            log::warn!("{}", DRY_RUN_NOTICE);
            self.transition(DriverState::Done);
            return Ok(true);
        }

        let _timer = ScopedTimer::new("pipeline run");
        let started = Instant::now();

        log::info!(
            "Starting run: db={} batch_size={} backend={} query={}",
            args.database,
            args.batch_size,
            args.backend,
            args.query
        );

        let Self {
            fetcher,
            processor,
            state,
            stats,
        } = &mut *self;

        let mut stream = match &args.precalculated_sources {
            Some(sources) => {
                log::info!("Using {} precalculated sources, skipping search", sources.len());
                BatchStream::precalculated(sources)
            }
            None => {
                let request = FetchRequest::from(args);
                fetcher
                    .fetch_all(&request)
                    .map_err(|source| PipelineError::FetchFailed {
                        term: request.term.clone(),
                        db: request.db.clone(),
                        source,
                    })?
            }
        };

        loop {
            set_state(state, DriverState::Fetching);

            let batch = stream
                .next_batch()
                .map_err(|source| PipelineError::BatchFailed {
                    index: stats.batches,
                    source,
                })?;

            let Some(batch) = batch else {
                break;
            };

            stats.batches += 1;
            log::debug!("Pulled batch {} with {} items", stats.batches, batch.len());

            set_state(state, DriverState::Processing);
            stats.items += drain_batch(processor, &args.backend, &batch)?;
        }

        drop(stream);
        self.stats.elapsed = started.elapsed();
        self.transition(DriverState::Done);

        log::info!(
            "Run finished: {} batches, {} items in {:.2}s",
            self.stats.batches,
            self.stats.items,
            self.stats.elapsed.as_secs_f64()
        );

        Ok(true)
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn into_parts(self) -> (F, P) {
        (self.fetcher, self.processor)
    }

    fn transition(&mut self, next: DriverState) {
        set_state(&mut self.state, next);
    }
}

fn set_state(state: &mut DriverState, next: DriverState) {
    if *state != next {
        log::trace!("Driver state {:?} -> {:?}", state, next);
        *state = next;
    }
}

fn drain_batch<P: ItemProcessor>(
    processor: &mut P,
    backend: &str,
    batch: &Batch,
) -> Result<usize, PipelineError> {
    let mut processed = 0;

    for item in batch.items() {
        let output = processor
            .process_item(backend, &item.address, &item.filename)
            .map_err(|source| PipelineError::ProcessFailed {
                backend: backend.to_string(),
                address: item.address.clone(),
                filename: item.filename.clone(),
                source,
            })?;

        log::debug!("Processed {} -> {:?}", item, output);
        processed += 1;
    }

    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::source::SourceItem;
    use indexmap::IndexMap;

    struct ScriptedFetcher {
        pages: Vec<Batch>,
        requests: Vec<FetchRequest>,
    }

    impl ScriptedFetcher {
        fn new(pages: Vec<Batch>) -> Self {
            Self {
                pages,
                requests: Vec::new(),
            }
        }
    }

    impl BatchFetcher for ScriptedFetcher {
        fn fetch_all(&mut self, request: &FetchRequest) -> anyhow::Result<BatchStream<'_>> {
            self.requests.push(request.clone());
            Ok(BatchStream::from_batches(self.pages.clone()))
        }
    }

    #[derive(Default)]
    struct RecordingProcessor {
        calls: Vec<(String, String, String)>,
        fail_on: Option<String>,
    }

    impl ItemProcessor for RecordingProcessor {
        type Output = usize;

        fn process_item(&mut self, backend: &str, address: &str, filename: &str) -> anyhow::Result<usize> {
            if self.fail_on.as_deref() == Some(address) {
                anyhow::bail!("download refused");
            }
            self.calls
                .push((backend.to_string(), address.to_string(), filename.to_string()));
            Ok(self.calls.len())
        }
    }

    fn args() -> CanonicalArguments {
        CanonicalArguments {
            database: "gds".to_string(),
            query: "cancer+AND+csv[Supplementary Files]".to_string(),
            batch_size: 2,
            backend: "local".to_string(),
            precalculated_sources: None,
            dry_run: false,
        }
    }

    fn page(entries: &[(&str, &str, &str)]) -> Batch {
        entries
            .iter()
            .map(|(k, a, f)| (k.to_string(), SourceItem::new(*a, *f)))
            .collect()
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let mut driver = PipelineDriver::new(
            ScriptedFetcher::new(vec![page(&[("1", "a1", "f1")])]),
            RecordingProcessor::default(),
        );
        let mut canonical = args();
        canonical.dry_run = true;

        assert!(driver.run(&canonical).unwrap());
        assert_eq!(driver.state(), DriverState::Done);

        let (fetcher, processor) = driver.into_parts();
        assert!(fetcher.requests.is_empty());
        assert!(processor.calls.is_empty());
    }

    #[test]
    fn test_precalculated_sources_bypass_fetch() {
        let mut sources = IndexMap::new();
        sources.insert("k1".to_string(), SourceItem::new("addr1", "f1"));

        let mut canonical = args();
        canonical.precalculated_sources = Some(sources);

        let mut driver = PipelineDriver::new(ScriptedFetcher::new(vec![]), RecordingProcessor::default());
        assert!(driver.run(&canonical).unwrap());

        let (fetcher, processor) = driver.into_parts();
        assert!(fetcher.requests.is_empty());
        assert_eq!(
            processor.calls,
            vec![("local".to_string(), "addr1".to_string(), "f1".to_string())]
        );
    }

    #[test]
    fn test_processes_batches_in_order_until_sentinel() {
        let pages = vec![
            page(&[("1", "a1", "f1"), ("2", "a2", "f2")]),
            page(&[("3", "a3", "f3")]),
            Batch::new(),
            page(&[("4", "never", "never")]),
        ];
        let mut driver = PipelineDriver::new(ScriptedFetcher::new(pages), RecordingProcessor::default());

        assert!(driver.run(&args()).unwrap());
        assert_eq!(driver.stats().batches, 2);
        assert_eq!(driver.stats().items, 3);

        let (fetcher, processor) = driver.into_parts();
        assert_eq!(
            fetcher.requests,
            vec![FetchRequest::new("cancer+AND+csv[Supplementary Files]", "gds", 2)]
        );
        let addresses: Vec<&str> = processor.calls.iter().map(|c| c.1.as_str()).collect();
        assert_eq!(addresses, vec!["a1", "a2", "a3"]);
    }

    #[test]
    fn test_processing_failure_aborts_run() {
        let pages = vec![
            page(&[("1", "a1", "f1"), ("2", "bad", "f2"), ("3", "a3", "f3")]),
            page(&[("4", "a4", "f4")]),
        ];
        let processor = RecordingProcessor {
            fail_on: Some("bad".to_string()),
            ..Default::default()
        };
        let mut driver = PipelineDriver::new(ScriptedFetcher::new(pages), processor);

        let err = driver.run(&args()).unwrap_err();
        assert!(err.is_process_error());
        assert!(err.to_string().contains("bad"));
        assert_eq!(driver.state(), DriverState::Processing);
        assert_eq!(driver.processor().calls.len(), 1);
    }

    #[test]
    fn test_fetch_failure_propagates() {
        let fetcher = |_: &FetchRequest| -> anyhow::Result<BatchStream<'static>> {
            Err(anyhow::anyhow!("esearch returned 503"))
        };
        let processor = |_: &str, _: &str, _: &str| -> anyhow::Result<()> { Ok(()) };
        let mut driver = PipelineDriver::new(fetcher, processor);

        let err = driver.run(&args()).unwrap_err();
        assert!(err.is_fetch_error());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_mid_stream_failure_propagates() {
        let fetcher = |_: &FetchRequest| -> anyhow::Result<BatchStream<'static>> {
            let pages: Vec<anyhow::Result<Batch>> = vec![
                Ok(Batch::single("1", SourceItem::new("a1", "f1"))),
                Err(anyhow::anyhow!("efetch page 2 failed")),
            ];
            Ok(BatchStream::from_results(pages))
        };
        let mut driver = PipelineDriver::new(fetcher, RecordingProcessor::default());

        match driver.run(&args()) {
            Err(PipelineError::BatchFailed { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(driver.processor().calls.len(), 1);
    }
}
