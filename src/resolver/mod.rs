// Mon Oct 19 2026 - Alex

pub mod args;
pub mod canonical;
pub mod defaults;
pub mod precedence;
pub mod query;

pub use args::{ArgumentError, RawArguments};
pub use canonical::CanonicalArguments;
pub use defaults::ResolverDefaults;
pub use precedence::{Precedence, Presence};
pub use query::QueryTerms;

use crate::config::{Config, QueryConfig};
use indexmap::IndexMap;

const FROM_RAW: &str = "argument";
const FROM_CONFIG: &str = "config";
const FROM_DEFAULT: &str = "default";
const UNSET: &str = "unset";

/// Resolved arguments plus, per field, which input supplied the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub arguments: CanonicalArguments,
    pub origins: IndexMap<&'static str, &'static str>,
}

/// Merges caller arguments, configuration and defaults into one
/// `CanonicalArguments`. Never fails and has no side effects.
#[derive(Debug, Clone, Default)]
pub struct ArgumentResolver {
    defaults: ResolverDefaults,
}

impl ArgumentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: ResolverDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &ResolverDefaults {
        &self.defaults
    }

    pub fn resolve(&self, config: Option<&Config>, raw: Option<&RawArguments>) -> CanonicalArguments {
        self.resolve_traced(config, raw).arguments
    }

    pub fn resolve_traced(&self, config: Option<&Config>, raw: Option<&RawArguments>) -> Resolution {
        let query_cfg: Option<&QueryConfig> = config.and_then(|c| c.query.as_ref());
        let defaults = &self.defaults;
        let mut origins = IndexMap::new();

        // Raw fragments are joined; configuration text is taken as-is.
        let (origin, free_text) = resolved(
            Precedence::new()
                .candidate(FROM_RAW, || {
                    raw.and_then(|r| r.query.as_deref())
                        .and_then(query::join_fragments)
                })
                .candidate(FROM_CONFIG, || query_cfg.and_then(|q| q.text.clone())),
        );
        origins.insert("free_text", origin);

        let (origin, organism) = resolved(
            Precedence::new()
                .candidate(FROM_RAW, || raw.and_then(|r| r.organism.clone()))
                .candidate(FROM_CONFIG, || query_cfg.and_then(|q| q.organism.clone())),
        );
        origins.insert("organism", origin);

        // No caller argument exists for the entry type.
        let (origin, entry_type) = resolved(
            Precedence::new()
                .candidate(FROM_CONFIG, || query_cfg.and_then(|q| q.entrytype.clone())),
        );
        origins.insert("entry_type", origin);

        let (origin, file_format) = resolved(
            Precedence::new()
                .candidate(FROM_CONFIG, || query_cfg.and_then(|q| q.fileformat.clone()))
                .candidate(FROM_DEFAULT, || Some(defaults.file_format.clone())),
        );
        origins.insert("file_format", origin);

        let query = QueryTerms::new()
            .with_free_text(free_text)
            .with_organism(organism)
            .with_entry_type(entry_type)
            .with_file_format(file_format)
            .render();

        let (origin, database) = resolved_or(
            Precedence::new()
                .candidate(FROM_RAW, || raw.and_then(|r| r.database.clone())),
            defaults.database.clone(),
        );
        origins.insert("database", origin);

        let (origin, increment) = resolved_or(
            Precedence::new()
                .candidate(FROM_RAW, || raw.and_then(|r| r.batch_size))
                .candidate(FROM_CONFIG, || config.and_then(|c| c.batch_size)),
            defaults.batch_size,
        );
        origins.insert("batch_size", origin);

        let (origin, backend) = resolved_or(
            Precedence::new()
                .candidate(FROM_RAW, || raw.and_then(|r| r.backend.clone()))
                .candidate(FROM_CONFIG, || config.and_then(|c| c.backend.clone())),
            defaults.backend.clone(),
        );
        origins.insert("backend", origin);

        let (origin, precalculated_sources) = resolved(
            Precedence::new()
                .candidate(FROM_CONFIG, || config.and_then(|c| c.accession_numbers.clone())),
        );
        origins.insert("precalculated_sources", origin);

        let dry_run = config.map(|c| c.dry_run).unwrap_or(false);
        origins.insert("dry_run", if config.is_some() { FROM_CONFIG } else { FROM_DEFAULT });

        Resolution {
            arguments: CanonicalArguments {
                database,
                query,
                batch_size: floor_batch_size(increment),
                backend,
                precalculated_sources,
                dry_run,
            },
            origins,
        }
    }
}

pub fn resolve(config: Option<&Config>, raw: Option<&RawArguments>) -> CanonicalArguments {
    ArgumentResolver::new().resolve(config, raw)
}

fn resolved<T: Presence>(chain: Precedence<'_, T>) -> (&'static str, Option<T>) {
    match chain.resolve_with_origin() {
        Some((origin, value)) => (origin, Some(value)),
        None => (UNSET, None),
    }
}

fn resolved_or<T: Presence>(chain: Precedence<'_, T>, default: T) -> (&'static str, T) {
    chain
        .resolve_with_origin()
        .unwrap_or((FROM_DEFAULT, default))
}

fn floor_batch_size(increment: i64) -> usize {
    usize::try_from(increment.max(1)).unwrap_or(usize::MAX)
}
