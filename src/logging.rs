//! Set up logging for the binaries.
//!
//! Logs go to stderr, leaving stdout for results.
//! Verbosity comes from `RUST_LOG` and defaults to warnings only.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init() {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .init();
}
