// Mon Oct 19 2026 - Alex

pub mod collaborators;
pub mod driver;
pub mod error;
pub mod source;
pub mod stream;

pub use collaborators::{BatchFetcher, FetchRequest, ItemProcessor, NoFetch};
pub use driver::{DriverState, PipelineDriver, RunStats};
pub use error::PipelineError;
pub use source::{Batch, SourceItem};
pub use stream::BatchStream;
