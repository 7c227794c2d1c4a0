// LogLedger - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogLedger operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LedgerError {
    /// Category lookup failed.
    Store(StoreError),

    /// Export operation failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Reading ingest input failed.
    Ingest(IngestError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "Store error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Ingest(e) => write!(f, "Ingest error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Ingest(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

/// Errors related to category lookup.
///
/// Only reachable from textual input: a `Category` value is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The label does not name any known category.
    CategoryNotFound { label: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryNotFound { label } => write!(
                f,
                "Unknown category '{label}'. Expected one of: {}",
                crate::core::model::Category::all()
                    .iter()
                    .map(|c| c.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StoreError> for LedgerError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// The sink rejected data.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },

    /// The finished export could not be moved into place.
    Finalise { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "Export I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
            Self::Finalise { path, source } => write!(
                f,
                "Failed to finalise export file '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
            Self::Finalise { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for LedgerError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for LedgerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Ingest errors
// ---------------------------------------------------------------------------

/// Errors for a single line of `CATEGORY,message` input.
#[derive(Debug)]
pub enum IngestError {
    /// The line has no comma separating category and message.
    MissingSeparator { line_number: u64 },

    /// The category column is not a known category.
    UnknownCategory {
        line_number: u64,
        source: StoreError,
    },

    /// The input stream could not be read.
    Io { line_number: u64, source: io::Error },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { line_number } => write!(
                f,
                "line {line_number}: expected 'CATEGORY,message'"
            ),
            Self::UnknownCategory {
                line_number,
                source,
            } => write!(f, "line {line_number}: {source}"),
            Self::Io {
                line_number,
                source,
            } => write!(f, "line {line_number}: read failed: {source}"),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownCategory { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<IngestError> for LedgerError {
    fn from(e: IngestError) -> Self {
        Self::Ingest(e)
    }
}

/// Convenience type alias for LogLedger results.
pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_category_not_found_lists_valid_categories() {
        let e = StoreError::CategoryNotFound {
            label: "INVOICES".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("'INVOICES'"), "{msg}");
        assert!(msg.contains("SYSTEM, ORDERS"), "{msg}");
    }

    #[test]
    fn test_ledger_error_preserves_source_chain() {
        let e: LedgerError = ExportError::Io {
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        }
        .into();
        let export = e.source().expect("export layer");
        let io = export.source().expect("io layer");
        assert_eq!(io.to_string(), "pipe closed");
    }

    #[test]
    fn test_ingest_unknown_category_chains_store_error() {
        let e = IngestError::UnknownCategory {
            line_number: 7,
            source: StoreError::CategoryNotFound {
                label: "X".to_string(),
            },
        };
        assert!(e.to_string().starts_with("line 7:"));
        assert!(e.source().is_some());
    }
}
