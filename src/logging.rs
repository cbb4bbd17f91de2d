//! Diagnostic logging to stderr.
//!
//! Progress for humans goes through [`crate::ui`]; this is for request-level
//! detail (URLs, cursors, skipped projects) and is quiet unless asked for.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug output for
/// this crate with `--verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "env_backup=debug"
    } else {
        "env_backup=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
