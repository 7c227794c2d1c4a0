// LogLedger - core/export.rs
//
// CSV and JSON export of one category's entries.
// Core layer: writes to any Write trait object.
//
// Each document is rendered in memory first and handed to the sink in one
// write_all, so a sink failure surfaces as an error and never as a
// silently truncated export.

use crate::core::model::LogEntry;
use crate::util::error::ExportError;
use std::io::Write;

/// CSV header row.
pub const CSV_HEADER: [&str; 3] = ["type", "time", "message"];

/// Render entries as CSV bytes.
///
/// Layout: `type,time,message` then one `label,time,message` row per entry,
/// `\n` terminated. Fields are written verbatim: embedded commas, quotes,
/// and newlines are not escaped.
pub fn render_csv(entries: &[LogEntry]) -> Result<Vec<u8>, ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExportError::Csv { source: e })?;

    for entry in entries {
        csv_writer
            .write_record([entry.category_label(), entry.timestamp(), entry.message()])
            .map_err(|e| ExportError::Csv { source: e })?;
    }

    csv_writer
        .into_inner()
        .map_err(|e| ExportError::Io {
            source: std::io::Error::new(e.error().kind(), e.error().to_string()),
        })
}

/// Export entries to CSV format.
///
/// Returns the number of data rows written (header excluded).
pub fn export_csv<W: Write>(entries: &[LogEntry], mut writer: W) -> Result<usize, ExportError> {
    let bytes = render_csv(entries)?;
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| ExportError::Io { source: e })?;
    Ok(entries.len())
}

/// Export entries to JSON format (array of `{type, time, message}` objects).
pub fn export_json<W: Write>(
    entries: &[LogEntry],
    mut writer: W,
    pretty: bool,
) -> Result<usize, ExportError> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(entries)
    } else {
        serde_json::to_vec(entries)
    }
    .map_err(|e| ExportError::Json { source: e })?;

    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| ExportError::Io { source: e })?;
    Ok(entries.len())
}
