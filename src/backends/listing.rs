// Mon Oct 19 2026 - Alex

use crate::pipeline::ItemProcessor;
use colored::Colorize;

/// Processing stand-in that reports each item instead of downloading it.
#[derive(Debug, Default)]
pub struct ListingProcessor {
    quiet: bool,
    listed: Vec<String>,
}

impl ListingProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn listed(&self) -> &[String] {
        &self.listed
    }
}

impl ItemProcessor for ListingProcessor {
    type Output = String;

    fn process_item(&mut self, backend: &str, address: &str, filename: &str) -> anyhow::Result<String> {
        let line = format!("[{}] {} -> {}", backend, address, filename);

        if !self.quiet {
            println!("{} {}", "[+]".green(), line);
        }

        self.listed.push(filename.to_string());
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_records_filenames() {
        let mut processor = ListingProcessor::new().with_quiet(true);

        let line = processor.process_item("local", "ftp://host/a.csv", "a.csv").unwrap();
        processor.process_item("local", "ftp://host/b.csv", "b.csv").unwrap();

        assert_eq!(line, "[local] ftp://host/a.csv -> a.csv");
        assert_eq!(processor.listed(), &["a.csv".to_string(), "b.csv".to_string()]);
    }
}
