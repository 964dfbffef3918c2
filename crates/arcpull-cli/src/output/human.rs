//! Human-readable output formatter with colors and styling.

use anyhow::Result;
use arcpull_core::ExtractionRecord;
use arcpull_core::record::StoredLocation;
use console::Term;
use console::style;

use super::formatter::OutputFormatter;

/// How many extracted files are listed before collapsing into a count.
const LISTING_LIMIT: usize = 10;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        #[allow(clippy::cast_precision_loss)]
        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn location_note(record: &ExtractionRecord) -> String {
        match &record.stored {
            StoredLocation::Directory { stored_path } => stored_path.clone(),
            StoredLocation::Blob { download_url, .. } => download_url.clone(),
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_run_result(&self, records: &[ExtractionRecord]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Unpacked {} files",
                style("✓").green().bold(),
                records.len()
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("Unpacked {} files", records.len()));
        }

        let limit = if self.verbose {
            records.len()
        } else {
            LISTING_LIMIT
        };
        for record in records.iter().take(limit) {
            let _ = self.term.write_line(&format!(
                "  {:>10}  {}  → {}",
                Self::format_size(record.size),
                record.file_name,
                Self::location_note(record)
            ));
        }
        if records.len() > limit {
            let _ = self
                .term
                .write_line(&format!("  ... and {} more files", records.len() - limit));
        }

        let total: u64 = records.iter().map(|r| r.size).sum();
        let _ = self
            .term
            .write_line(&format!("  Total size: {}", Self::format_size(total)));

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.term.write_line(&format!("ERROR: {error:?}"));
        }
    }
}
