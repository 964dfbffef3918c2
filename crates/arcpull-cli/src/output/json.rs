//! JSON output formatter for machine-readable results.

use std::io::Write;
use std::io::{self};

use anyhow::Result;
use arcpull_core::ExtractionRecord;
use serde::Serialize;

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_run_result(&self, records: &[ExtractionRecord]) -> Result<()> {
        let output = JsonOutput::success("unpack", records);
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("unpack", format!("{error:?}"));
        let _ = Self::output(&output);
    }
}
