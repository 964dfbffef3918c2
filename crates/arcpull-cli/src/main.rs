//! Arcpull CLI - fetches a remote archive, unpacks it in memory and
//! stores every file it contains.

mod cli;
mod error;
mod output;

use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use arcpull_core::config::Input;
use arcpull_core::config::PipelineConfig;
use arcpull_core::config::SinkKind;
use arcpull_core::pipeline::Pipeline;
use arcpull_core::record::ExtractionRecord;
use arcpull_core::sink::BlobSink;
use arcpull_core::sink::DirectorySink;
use arcpull_core::sink::Sink;
use arcpull_core::storage::KeyValueStore;
use arcpull_core::storage::local::LocalDataset;
use arcpull_core::storage::local::LocalKeyValueStore;
use clap::Parser;

use crate::error::convert_unpack_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(&cli);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(records) => formatter.format_run_result(&records),
        Err(err) => {
            formatter.format_error(&err);
            std::process::exit(1);
        }
    }
}

fn init_tracing(cli: &cli::Cli) {
    let default_directive = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &cli::Cli) -> Result<Vec<ExtractionRecord>> {
    let input = resolve_input(cli)?;
    let sink_kind = if cli.blob {
        SinkKind::Blob
    } else {
        SinkKind::Directory
    };
    let config = PipelineConfig::from_input(input, sink_kind).map_err(convert_unpack_error)?;

    let sink = match config.sink {
        SinkKind::Directory => Sink::Directory(
            DirectorySink::create(&config.folder_path).map_err(convert_unpack_error)?,
        ),
        SinkKind::Blob => {
            let store = LocalKeyValueStore::create(cli.storage_dir.join("key_value_store"))
                .map_err(convert_unpack_error)?;
            Sink::Blob(BlobSink::new(Arc::new(store) as Arc<dyn KeyValueStore>))
        }
    };
    let dataset = LocalDataset::create(cli.storage_dir.join("dataset"))
        .map_err(convert_unpack_error)?;

    let pipeline = Pipeline::new(sink, Arc::new(dataset));
    pipeline.run(&config).await.map_err(convert_unpack_error)
}

/// Builds the run input from the `--input` document or from flags.
/// Flags override document values when both are given.
fn resolve_input(cli: &cli::Cli) -> Result<Input> {
    let mut input = match &cli.input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read input document '{}'", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse input document '{}'", path.display()))?
        }
        None => Input {
            file_url: cli.url.clone(),
            ..Input::default()
        },
    };

    if let Some(dir) = &cli.output_dir {
        input.folder_path = Some(dir.clone());
    }
    if let Some(cap) = cli.max_file_size_mb {
        input.max_file_size_mb = Some(cap);
    }
    if let Some(prefix) = &cli.file_name_prefix {
        input.file_name_prefix = Some(prefix.clone());
    }

    Ok(input)
}
