//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "arcpull")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL of the archive to fetch and unpack
    #[arg(value_name = "URL", conflicts_with = "input")]
    pub url: Option<String>,

    /// Read the run input from a JSON document instead
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Destination directory for extracted files
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Store extracted files in the local blob store instead of a directory
    #[arg(long)]
    pub blob: bool,

    /// Root directory for the local blob store and dataset
    #[arg(long, value_name = "DIR", default_value = "./storage")]
    pub storage_dir: PathBuf,

    /// Size cap recorded with each result (informational)
    #[arg(long, value_name = "MB")]
    pub max_file_size_mb: Option<u64>,

    /// Name prefix recorded with each result (informational)
    #[arg(long, value_name = "PREFIX")]
    pub file_name_prefix: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}
