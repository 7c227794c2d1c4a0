// LogLedger - core/writer.rs
//
// The mirror-write rule. Every write lands in its target category and,
// unless the target is SYSTEM, a copy lands in SYSTEM as well.

use crate::core::clock::{format_timestamp, Clock};
use crate::core::model::{Category, LogEntry};
use crate::core::store::CategoryStore;

/// What a single write stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Timestamp shared by the entry and its mirror.
    pub timestamp: String,

    /// True when a SYSTEM copy was appended.
    pub mirrored: bool,
}

/// Appends entries to a [`CategoryStore`] using timestamps from a [`Clock`].
pub struct LogWriter<'a> {
    clock: &'a dyn Clock,
}

impl<'a> LogWriter<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// Store `message` under `category`, mirroring into SYSTEM.
    ///
    /// The mirrored entry is labelled "SYSTEM" rather than with the
    /// original category, so SYSTEM output does not reveal where a
    /// message was first written.
    pub fn write(
        &self,
        store: &mut CategoryStore,
        category: Category,
        message: &str,
    ) -> WriteOutcome {
        let timestamp = format_timestamp(self.clock.now());

        store.append(
            category,
            LogEntry::new(category.label(), timestamp.as_str(), message),
        );

        let mirrored = !category.is_system();
        if mirrored {
            store.append(
                Category::System,
                LogEntry::new(Category::System.label(), timestamp.as_str(), message),
            );
        }

        tracing::debug!(
            category = category.label(),
            mirrored,
            time = %timestamp,
            "Log entry written"
        );

        WriteOutcome {
            timestamp,
            mirrored,
        }
    }
}
