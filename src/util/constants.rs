// LogLedger - util/constants.rs
//
// Single source of truth for all named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogLedger";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogLedger";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Logging
// =============================================================================

/// Default tracing level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted by `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Export
// =============================================================================

/// Pretty-print JSON exports unless config says otherwise.
pub const DEFAULT_JSON_PRETTY: bool = true;

/// Suffix appended to the target path while a file export is in flight.
pub const EXPORT_TEMP_SUFFIX: &str = "tmp";

// =============================================================================
// Ingest
// =============================================================================

/// Separator between the category column and the message in ingest input.
pub const INGEST_SEPARATOR: char = ',';

/// Maximum number of per-line ingest problems reported before suppression.
pub const MAX_INGEST_WARNINGS: usize = 1_000;

// =============================================================================
// Files
// =============================================================================

/// Config file name, looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
