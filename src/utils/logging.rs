// Mon Oct 19 2026 - Alex

use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Colored stderr logging at `level`.
    pub fn init_logger(level: LevelFilter) {
        install(HarvestLogger::stderr(level), level);
    }

    /// Timestamped lines appended to `file_path`; warnings and errors are
    /// still echoed to stderr.
    pub fn init_logger_with_file(level: LevelFilter, file_path: &Path) -> std::io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;

        install(HarvestLogger::stderr(level).with_file(file), level);
        Ok(())
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }

    pub fn level_from_verbosity(verbosity: usize) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Defers to `env_logger` so `RUST_LOG` filters apply.
pub fn init_from_env() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .try_init();
}

fn install(logger: HarvestLogger, level: LevelFilter) {
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
}

struct HarvestLogger {
    level: LevelFilter,
    use_color: bool,
    file: Option<Mutex<File>>,
}

impl HarvestLogger {
    fn stderr(level: LevelFilter) -> Self {
        Self {
            level,
            use_color: std::env::var_os("NO_COLOR").is_none(),
            file: None,
        }
    }

    fn with_file(mut self, file: File) -> Self {
        self.file = Some(Mutex::new(file));
        self
    }

    fn level_label(&self, level: Level) -> String {
        if !self.use_color {
            return format!("{:5}", level);
        }
        let label = match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        };
        label.to_string()
    }

    fn echo_to_stderr(&self, level: Level) -> bool {
        self.file.is_none() || level <= Level::Warn
    }
}

impl Log for HarvestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if self.echo_to_stderr(record.level()) {
            let target = format!("[{}]", record.target());
            eprintln!("{} {} {}", self.level_label(record.level()), target.dimmed(), record.args());
        }

        if let Some(file) = &self.file {
            let line = format!(
                "{} {:5} [{}] {}\n",
                unix_timestamp(),
                record.level(),
                record.target(),
                record.args()
            );
            if let Ok(mut file) = file.lock() {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

fn unix_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    format!("{}.{:03}", duration.as_secs(), duration.subsec_millis())
}

/// Logs how long a scope took, at debug level, when dropped.
pub struct ScopedTimer {
    name: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &str) -> Self {
        log::trace!("[TIMER] {} started", name);
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        log::debug!(
            "[TIMER] {} took {:.2}ms",
            self.name,
            self.start.elapsed().as_secs_f64() * 1000.0
        );
    }
}
