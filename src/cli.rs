use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::source::DEFAULT_ENDPOINT;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Search API URL that returns the front page as `{"hits": [...]}`.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    /// Request timeout in seconds, body included.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Write logs to this file.  The terminal belongs to the UI, so without
    /// it nothing is logged.
    ///
    /// Verbosity follows `RUST_LOG` (default `info`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
