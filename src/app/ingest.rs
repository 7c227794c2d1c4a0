// LogLedger - app/ingest.rs
//
// Feeds `CATEGORY,message` lines into a LogService.
// Used by the CLI harness; blank lines and `#` comments are skipped.
// Bad lines are collected (capped) and skipped; a read failure stops the
// run and is returned as an error.

use crate::app::service::LogService;
use crate::core::model::Category;
use crate::util::constants;
use crate::util::error::IngestError;
use std::io::BufRead;

/// Result of ingesting one input stream.
#[derive(Debug, Default)]
pub struct IngestSummary {
    /// Lines that produced a write.
    pub written: usize,
    /// Lines that were rejected.
    pub rejected: usize,
    /// Problems for rejected lines (capped at MAX_INGEST_WARNINGS).
    pub errors: Vec<IngestError>,
    /// Total lines read.
    pub lines_processed: u64,
}

/// Split one line into its category and message.
///
/// Only the first separator splits; the message keeps any further commas.
pub fn parse_line(line: &str, line_number: u64) -> Result<(Category, &str), IngestError> {
    let (raw_category, message) = line
        .split_once(constants::INGEST_SEPARATOR)
        .ok_or(IngestError::MissingSeparator { line_number })?;

    let category = raw_category
        .parse::<Category>()
        .map_err(|source| IngestError::UnknownCategory {
            line_number,
            source,
        })?;

    Ok((category, message))
}

/// Read every line from `reader` and write it to `service`.
pub fn ingest<R: BufRead>(service: &LogService, reader: R) -> Result<IngestSummary, IngestError> {
    let mut summary = IngestSummary::default();

    for (idx, line_result) in reader.lines().enumerate() {
        let line_number = idx as u64 + 1;
        let line = line_result.map_err(|source| IngestError::Io {
            line_number,
            source,
        })?;
        summary.lines_processed = line_number;

        let trimmed = line.trim_end_matches('\r');
        if trimmed.trim().is_empty() || trimmed.trim_start().starts_with('#') {
            continue;
        }

        match parse_line(trimmed, line_number) {
            Ok((category, message)) => {
                service.write(category, message);
                summary.written += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Skipping ingest line");
                summary.rejected += 1;
                if summary.errors.len() < constants::MAX_INGEST_WARNINGS {
                    summary.errors.push(e);
                }
            }
        }
    }

    tracing::info!(
        written = summary.written,
        rejected = summary.rejected,
        lines = summary.lines_processed,
        "Ingest complete"
    );
    Ok(summary)
}
