// Mon Oct 19 2026 - Alex

pub mod listing;
pub mod recorded;

pub use listing::ListingProcessor;
pub use recorded::{RecordedFetcher, Recording};
