//! Pipeline driver: fetch, extract, store, record.

use std::sync::Arc;

use crate::Result;
use crate::config::PipelineConfig;
use crate::extract::extract_entries;
use crate::fetch::fetch_bytes;
use crate::formats::resolve_format;
use crate::record::ExtractionRecord;
use crate::sink::Sink;
use crate::storage::Dataset;

/// How many extracted file names the run summary lists before collapsing
/// the remainder into a count.
const SUMMARY_LIMIT: usize = 10;

/// One-shot driver for a fetch → extract → store → record run.
///
/// Everything is sequential: the fetch, each sink store and each dataset
/// push are awaited one at a time. Nothing is retried; the first failure
/// aborts the run. Records already pushed before a failure stay pushed.
pub struct Pipeline {
    client: reqwest::Client,
    sink: Sink,
    dataset: Arc<dyn Dataset>,
}

impl Pipeline {
    /// Builds a pipeline with a default HTTP client.
    #[must_use]
    pub fn new(sink: Sink, dataset: Arc<dyn Dataset>) -> Self {
        Self::with_client(reqwest::Client::new(), sink, dataset)
    }

    /// Builds a pipeline with a caller-configured HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, sink: Sink, dataset: Arc<dyn Dataset>) -> Self {
        Self {
            client,
            sink,
            dataset,
        }
    }

    /// Runs the pipeline once, returning all emitted records in archive
    /// order.
    ///
    /// # Errors
    ///
    /// Any stage failure propagates unrecovered; it is logged with its
    /// triggering context before being returned.
    pub async fn run(&self, config: &PipelineConfig) -> Result<Vec<ExtractionRecord>> {
        match self.run_inner(config).await {
            Ok(records) => Ok(records),
            Err(err) => {
                tracing::error!(
                    error = %err,
                    context = err.subject().unwrap_or(config.file_url.as_str()),
                    "pipeline run failed"
                );
                Err(err)
            }
        }
    }

    async fn run_inner(&self, config: &PipelineConfig) -> Result<Vec<ExtractionRecord>> {
        // Resolving the format first means an unsupported name never
        // causes network traffic.
        let format = resolve_format(config.file_url.as_str())?;

        let data = fetch_bytes(&self.client, &config.file_url).await?;
        let entries = extract_entries(&data, format)?;

        let mut records = Vec::with_capacity(entries.len());
        for entry in &entries {
            let stored = self.sink.store(entry).await?;
            records.push(ExtractionRecord {
                file_url: config.file_url.to_string(),
                file_name: entry.name.clone(),
                size: entry.size,
                stored,
                max_file_size_mb: config.max_file_size_mb,
                file_name_prefix: config.file_name_prefix.clone(),
            });
        }

        // Records are emitted only after the full entry list is known, so
        // the summary can stay bounded.
        for record in records.iter().take(SUMMARY_LIMIT) {
            tracing::info!(file = %record.file_name, "extracted");
        }
        if records.len() > SUMMARY_LIMIT {
            tracing::info!("... and {} more files", records.len() - SUMMARY_LIMIT);
        }

        for record in &records {
            self.dataset.push(record).await?;
        }
        tracing::info!(records = records.len(), "results pushed to dataset");

        Ok(records)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline").field("sink", &self.sink).finish_non_exhaustive()
    }
}
