//! Log filter setup

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the log filter for the binary
///
/// `--verbose` forces `debug`. Otherwise `RUST_LOG` is used when set and
/// valid, falling back to `info`.
pub fn log_filter(verbose: bool) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(verbose, directives.as_deref())
}

fn filter_from(verbose: bool, directives: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(LevelFilter::DEBUG.to_string());
    }

    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(LevelFilter::INFO.to_string()))
}
