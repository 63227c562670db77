// Mon Oct 19 2026 - Alex

use crate::resolver::RawArguments;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "geo-harvester")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Resolve a GEO search and harvest its supplementary files", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved run parameters as JSON.
    Resolve(ResolveArgs),
    /// Resolve and drive the harvest.
    Run(RunArgs),
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct SearchArgs {
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub database: Option<String>,

    /// Free-text fragments, joined with +AND+.
    #[arg(long = "term", value_name = "TEXT")]
    pub terms: Vec<String>,

    #[arg(long)]
    pub organism: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub batch_size: Option<i64>,

    #[arg(long)]
    pub backend: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Also show where each value came from.
    #[arg(long)]
    pub explain: bool,
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Recorded search results to replay instead of querying.
    #[arg(long)]
    pub batches: Option<PathBuf>,

    #[arg(long)]
    pub dry_run: bool,
}

impl SearchArgs {
    pub fn to_raw_arguments(&self) -> RawArguments {
        RawArguments {
            database: self.database.clone(),
            query: if self.terms.is_empty() { None } else { Some(self.terms.clone()) },
            organism: self.organism.clone(),
            batch_size: self.batch_size,
            backend: self.backend.clone(),
            precalculated_sources: None,
            dry_run: None,
        }
    }
}
