//! Tracing setup — structured JSON logging.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "LOOKAHEAD_LOG";

/// Install a JSON subscriber filtered by `LOOKAHEAD_LOG`, defaulting to
/// `info`.
///
/// Returns false if a global subscriber was already installed, so it is
/// safe to call from every entry point.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}

/// Install tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_noop() {
        init_tracing_with_filter("lookahead=debug");
        assert!(!init_tracing());
        assert!(!init_tracing_with_filter("warn"));
    }
}
