//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`,
//! which also logs every SQL statement sent to the server.

use tracing_subscriber::EnvFilter;

pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .try_init()
}
