// LogLedger - util/logging.rs
//
// Diagnostic logging for the ledger itself (not the stored entries).
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr, so exports written to stdout stay clean.
// Messages passed to the store are never logged above debug level.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
pub fn resolve_filter(env_set: bool, debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    if env_set {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = resolve_filter(
        std::env::var("RUST_LOG").is_ok(),
        debug_flag,
        config_level,
    );

    // try_init: a second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .compact()
        .try_init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_beats_config() {
        let filter = resolve_filter(false, true, Some("warn"));
        assert!(filter.to_string().eq_ignore_ascii_case("debug"));
    }

    #[test]
    fn test_config_level_used_without_flag() {
        let filter = resolve_filter(false, false, Some("warn"));
        assert!(filter.to_string().eq_ignore_ascii_case("warn"));
    }

    #[test]
    fn test_default_level() {
        let filter = resolve_filter(false, false, None);
        assert!(filter.to_string().eq_ignore_ascii_case("info"));
    }
}
