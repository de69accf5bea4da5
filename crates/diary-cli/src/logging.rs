//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never interleave with the menu on stdout.
//! `RUST_LOG` wins over `-v` flags, which win over `[log] level` in config.

use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Initialize the global tracing subscriber. Repeated calls are no-ops.
pub fn init_logging(verbosity: u8, configured_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, configured_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbosity: u8, configured_level: Option<&str>) -> &str {
    match verbosity {
        0 => configured_level
            .filter(|level| !level.trim().is_empty())
            .unwrap_or(DEFAULT_LEVEL),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
