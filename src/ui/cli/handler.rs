// Mon Oct 19 2026 - Alex

use super::args::{Args, Command, ResolveArgs, RunArgs, SearchArgs};
use crate::app;
use crate::backends::{ListingProcessor, RecordedFetcher};
use crate::config::Config;
use crate::pipeline::{BatchFetcher, NoFetch};
use crate::resolver::{ArgumentResolver, RawArguments};
use crate::ui::progress::{ProgressProcessor, ProgressSpinner};
use crate::utils::logging::{self, LoggingUtils};
use anyhow::Context;
use colored::Colorize;

pub struct CommandHandler {
    resolver: ArgumentResolver,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            resolver: ArgumentResolver::new(),
        }
    }

    pub fn with_resolver(resolver: ArgumentResolver) -> Self {
        Self { resolver }
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args)?;

        match args.command {
            Command::Resolve(resolve_args) => self.handle_resolve(resolve_args),
            Command::Run(run_args) => self.handle_run(run_args, args.quiet),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = LoggingUtils::level_from_str(&args.log_level);

        if let Some(path) = &args.log_file {
            LoggingUtils::init_logger_with_file(level, path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
        } else if std::env::var_os("RUST_LOG").is_some() {
            logging::init_from_env();
        } else {
            LoggingUtils::init_logger(level);
        }

        Ok(())
    }

    fn handle_resolve(&self, args: ResolveArgs) -> anyhow::Result<()> {
        let config = load_config(&args.search)?;
        let raw = args.search.to_raw_arguments();

        let resolution = self.resolver.resolve_traced(config.as_ref(), Some(&raw));
        println!("{}", resolution.arguments.to_json_pretty()?);

        if args.explain {
            println!();
            println!("{}", "Value origins".cyan().bold());
            println!("{}", "-".repeat(40).cyan());
            for (field, origin) in &resolution.origins {
                println!("  {:<24} {}", field, origin.yellow());
            }
        }

        Ok(())
    }

    fn handle_run(&self, args: RunArgs, quiet: bool) -> anyhow::Result<()> {
        let mut config = load_config(&args.search)?;
        if args.dry_run {
            config.get_or_insert_with(Config::new).dry_run = true;
        }
        let raw = args.search.to_raw_arguments();

        match &args.batches {
            Some(path) => {
                let fetcher = RecordedFetcher::load(path)?;
                self.drive(config.as_ref(), &raw, fetcher, quiet)
            }
            None => self.drive(config.as_ref(), &raw, NoFetch, quiet),
        }
    }

    fn drive<F: BatchFetcher>(
        &self,
        config: Option<&Config>,
        raw: &RawArguments,
        fetcher: F,
        quiet: bool,
    ) -> anyhow::Result<()> {
        let spinner = if quiet {
            ProgressSpinner::hidden()
        } else {
            ProgressSpinner::new("harvesting")
        };
        let processor = ProgressProcessor::new(
            ListingProcessor::new().with_quiet(quiet),
            spinner.clone(),
        );

        let result = app::run_with(&self.resolver, config, raw, fetcher, processor);

        match result {
            Ok(_) if config.map(|c| c.dry_run).unwrap_or(false) => {
                spinner.success("dry run, nothing fetched");
                if !quiet {
                    println!("{} Dry run!", "[*]".blue());
                }
                Ok(())
            }
            Ok(_) => {
                spinner.success(&format!("{} items processed", spinner.position()));
                Ok(())
            }
            Err(e) => {
                spinner.failure("harvest aborted");
                Err(e.into())
            }
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn load_config(search: &SearchArgs) -> anyhow::Result<Option<Config>> {
    search
        .config
        .as_ref()
        .map(|path| {
            log::info!("Loading configuration from {}", path.display());
            Config::load(path).with_context(|| format!("Could not load {}", path.display()))
        })
        .transpose()
}
