// Mon Oct 19 2026 - Alex

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod pipeline;
pub mod resolver;
pub mod ui;
pub mod utils;

pub use config::{Config, ConfigError, QueryConfig};
pub use pipeline::{BatchFetcher, ItemProcessor, PipelineDriver, PipelineError};
pub use resolver::{resolve, ArgumentResolver, CanonicalArguments, RawArguments, ResolverDefaults};
