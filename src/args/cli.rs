use clap::Parser;

use super::parsers::{parse_positive_u64, parse_positive_usize, parse_target_url};
use super::types::{DispatchMode, OutputFormat, PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "stress-test",
    version,
    about = "Stress test your API",
    long_about = "Fires a fixed number of HTTP GET requests at a URL with bounded concurrency and reports successes, non-200 status codes and connection errors."
)]
pub struct TesterArgs {
    /// URL to stress test
    #[arg(long = "url", short = 'u', visible_short_alias = 'r', value_parser = parse_target_url)]
    pub url: String,

    /// Number of requests to make
    #[arg(long = "requests", short = 'n', value_parser = parse_positive_u64)]
    pub requests: PositiveU64,

    /// Number of concurrent requests to make
    #[arg(long = "concurrency", short = 'c', value_parser = parse_positive_usize)]
    pub concurrency: PositiveUsize,

    /// Scheduling strategy: hard batch barriers or a fixed worker pool
    #[arg(long = "dispatch", value_enum, default_value_t = DispatchMode::Batch)]
    pub dispatch: DispatchMode,

    /// Report format printed on stdout
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Enable debug logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
