// LogLedger - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.
//
// The category set is fixed at build time and is not configurable. This
// file only covers the harness: diagnostic log level and export defaults.

use crate::app::service::ExportFormat;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogLedger configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logledger/ or %APPDATA%\LogLedger\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[export]` section.
    pub export: ExportSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[export]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// "csv" or "json".
    pub format: Option<String>,
    /// Pretty-print JSON exports.
    pub json_pretty: Option<bool>,
}

/// Validated configuration derived from `config.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Default export format when the CLI does not pick one.
    pub export_format: ExportFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            export_format: ExportFormat::Csv,
        }
    }
}

impl AppConfig {
    /// JSON export format honouring the configured pretty flag.
    pub fn json_format(&self) -> ExportFormat {
        match self.export_format {
            ExportFormat::Json { pretty } => ExportFormat::Json { pretty },
            ExportFormat::Csv => ExportFormat::Json {
                pretty: constants::DEFAULT_JSON_PRETTY,
            },
        }
    }
}

/// Parse and validate config text.
///
/// Out-of-range values do not fail the load: each produces a warning and
/// the default is kept.
pub fn parse_config(content: &str, path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut warnings: Vec<String> = Vec::new();
    let mut config = AppConfig::default();

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    expected: constants::VALID_LOG_LEVELS.join(", "),
                }
                .to_string(),
            );
        }
    }

    // -- Export: format + json_pretty --
    let pretty = raw
        .export
        .json_pretty
        .unwrap_or(constants::DEFAULT_JSON_PRETTY);
    if let Some(ref format) = raw.export.format {
        match format.to_lowercase().as_str() {
            "csv" => config.export_format = ExportFormat::Csv,
            "json" => config.export_format = ExportFormat::Json { pretty },
            other => warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "export.format".to_string(),
                    value: other.to_string(),
                    expected: "csv, json".to_string(),
                }
                .to_string(),
            ),
        }
    }

    Ok((config, warnings))
}

/// Load and validate `config.toml` at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning
/// so the harness still starts but the user is informed.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let loaded = std::fs::read_to_string(config_path)
        .map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })
        .and_then(|content| parse_config(&content, config_path));

    match loaded {
        Ok((config, warnings)) => {
            tracing::info!(path = %config_path.display(), "Loaded config.toml");
            if !warnings.is_empty() {
                tracing::warn!(
                    count = warnings.len(),
                    "Config validation produced warnings"
                );
            }
            (config, warnings)
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            (AppConfig::default(), vec![msg])
        }
    }
}
