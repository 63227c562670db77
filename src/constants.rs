// Mon Oct 19 2026 - Alex

// Named-argument keys accepted by `app::run` when raw arguments come in as a map.
pub const MAINARG_DATABASE: &str = "database";
pub const MAINARG_QUERY: &str = "query";
pub const MAINARG_ORGANISM: &str = "organism";
pub const MAINARG_BATCH_SIZE: &str = "batch_size";
pub const MAINARG_PROCESSING_BACKEND: &str = "backend";
pub const MAINARG_PRECALCULATED_SOURCES: &str = "precalculated_sources";
pub const MAINARG_DRY_RUN: &str = "dry_run";

pub const MAINARG_KEYS: &[&str] = &[
    MAINARG_DATABASE,
    MAINARG_QUERY,
    MAINARG_ORGANISM,
    MAINARG_BATCH_SIZE,
    MAINARG_PROCESSING_BACKEND,
    MAINARG_PRECALCULATED_SOURCES,
    MAINARG_DRY_RUN,
];

pub const DEFAULT_DB_VALUE: &str = "gds";
pub const DEFAULT_SEARCH_INCREMENT: i64 = 20;
pub const DEFAULT_FILE_FORMAT: &str = "csv";
pub const BACKEND_LOCAL: &str = "local";

pub const QUERY_SEPARATOR: &str = "+AND+";
pub const ORGANISM_TAG: &str = "[Organism]";
pub const ENTRY_TYPE_TAG: &str = "[EntryType]";
pub const FILE_FORMAT_TAG: &str = "[Supplementary Files]";

pub const DRY_RUN_NOTICE: &str = "Dry run: skipping fetch and processing";
