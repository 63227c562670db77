// Mon Oct 19 2026 - Alex

use crate::pipeline::ItemProcessor;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Clone)]
pub struct ProgressSpinner {
    spinner: ProgressBar,
}

impl ProgressSpinner {
    pub fn new(message: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {pos} items {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));

        Self { spinner }
    }

    pub fn hidden() -> Self {
        Self {
            spinner: ProgressBar::hidden(),
        }
    }

    pub fn inc(&self) {
        self.spinner.inc(1);
    }

    pub fn position(&self) -> u64 {
        self.spinner.position()
    }

    pub fn set_message(&self, message: &str) {
        self.spinner.set_message(message.to_string());
    }

    pub fn success(&self, message: &str) {
        self.spinner.finish_with_message(format!("✓ {}", message));
    }

    pub fn failure(&self, message: &str) {
        self.spinner.finish_with_message(format!("✗ {}", message));
    }

    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.spinner.suspend(f)
    }
}

/// Wraps a processor and ticks the spinner once per completed item.
pub struct ProgressProcessor<P> {
    inner: P,
    spinner: ProgressSpinner,
}

impl<P: ItemProcessor> ProgressProcessor<P> {
    pub fn new(inner: P, spinner: ProgressSpinner) -> Self {
        Self { inner, spinner }
    }

    pub fn spinner(&self) -> &ProgressSpinner {
        &self.spinner
    }

    pub fn into_inner(self) -> (P, ProgressSpinner) {
        (self.inner, self.spinner)
    }
}

impl<P: ItemProcessor> ItemProcessor for ProgressProcessor<P> {
    type Output = P::Output;

    fn process_item(&mut self, backend: &str, address: &str, filename: &str) -> anyhow::Result<P::Output> {
        let Self { inner, spinner } = self;
        let output = spinner.suspend(|| inner.process_item(backend, address, filename))?;
        spinner.inc();
        Ok(output)
    }
}
