// LogLedger - app/service.rs
//
// Process-owned facade over the category store.
//
// Design principles:
// - One explicitly constructed instance per process; no global state.
// - One exclusive lock covers the whole store, so a write and its SYSTEM
//   mirror are observed together or not at all.
// - Reads hand back owned copies; callers never borrow into the store.
// - Exports snapshot under the lock and do their I/O after releasing it.
// - File exports are atomic (write temp, rename to final).

use crate::core::clock::{Clock, SystemClock};
use crate::core::export;
use crate::core::model::{Category, LogEntry};
use crate::core::store::CategoryStore;
use crate::core::writer::{LogWriter, WriteOutcome};
use crate::util::constants::EXPORT_TEMP_SUFFIX;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Output format for exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json { pretty: bool },
}

/// Shared, thread-safe log store.
///
/// Wrap in `Arc` to share between threads.
pub struct LogService {
    store: Mutex<CategoryStore>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for LogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogService")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl Default for LogService {
    fn default() -> Self {
        Self::new()
    }
}

impl LogService {
    /// Create a service stamped by the wall clock, every category empty.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create a service with a custom time source.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            store: Mutex::new(CategoryStore::new()),
            clock,
        }
    }

    /// Lock the store. A poisoned lock is recovered: every mutation is
    /// applied in full before any code that could panic runs.
    fn lock(&self) -> MutexGuard<'_, CategoryStore> {
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Re-empty every category.
    pub fn reset(&self) {
        self.lock().reset();
        tracing::info!("Log store reset");
    }

    /// Store `message` under `category`, mirroring into SYSTEM for any
    /// other category.
    pub fn write(&self, category: Category, message: &str) -> WriteOutcome {
        let writer = LogWriter::new(&*self.clock);
        let mut store = self.lock();
        writer.write(&mut store, category, message)
    }

    /// Copy of `category`'s entries, oldest first.
    pub fn logs_for(&self, category: Category) -> Vec<LogEntry> {
        self.lock().read(category).to_vec()
    }

    /// Copy of the SYSTEM entries: every write, mirrors included.
    pub fn all_system_logs(&self) -> Vec<LogEntry> {
        self.logs_for(Category::System)
    }

    /// Per-category entry counts in slot order.
    pub fn counts(&self) -> Vec<(Category, usize)> {
        self.lock().counts()
    }

    /// Write `category` as CSV to `sink`. Returns the data row count.
    pub fn export_csv<W: Write>(&self, category: Category, sink: W) -> Result<usize, ExportError> {
        self.export(category, ExportFormat::Csv, sink)
    }

    /// The CSV export of `category` as bytes.
    pub fn csv_bytes(&self, category: Category) -> Result<Vec<u8>, ExportError> {
        export::render_csv(&self.logs_for(category))
    }

    /// Write `category` to `sink` in `format`. Returns the entry count.
    pub fn export<W: Write>(
        &self,
        category: Category,
        format: ExportFormat,
        sink: W,
    ) -> Result<usize, ExportError> {
        let entries = self.logs_for(category);
        let result = match format {
            ExportFormat::Csv => export::export_csv(&entries, sink),
            ExportFormat::Json { pretty } => export::export_json(&entries, sink, pretty),
        };

        match &result {
            Ok(count) => tracing::info!(
                category = category.label(),
                ?format,
                entries = count,
                "Export complete"
            ),
            Err(e) => tracing::warn!(
                category = category.label(),
                ?format,
                error = %e,
                "Export failed"
            ),
        }
        result
    }

    /// Export `category` to `path` atomically.
    ///
    /// The document is written to a sibling temp file and renamed over
    /// `path` only once complete. On failure the temp file is removed and
    /// `path` is left untouched.
    pub fn export_to_path(
        &self,
        category: Category,
        format: ExportFormat,
        path: &Path,
    ) -> Result<usize, ExportError> {
        let tmp = temp_path(path);

        let written = std::fs::File::create(&tmp)
            .map_err(|e| ExportError::Io { source: e })
            .and_then(|file| self.export(category, format, std::io::BufWriter::new(file)));

        let count = match written {
            Ok(count) => count,
            Err(e) => {
                let _ = std::fs::remove_file(&tmp);
                return Err(e);
            }
        };

        std::fs::rename(&tmp, path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            ExportError::Finalise {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        tracing::debug!(path = %path.display(), "Export file finalised");
        Ok(count)
    }
}

/// Sibling temp path for an in-flight export: `out.csv` → `out.csv.tmp`.
fn temp_path(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(EXPORT_TEMP_SUFFIX);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    const T: &str = "2024-03-01T09:15:02Z";

    fn service() -> LogService {
        LogService::with_clock(Box::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 2).unwrap(),
        )))
    }

    #[test]
    fn test_order_created_scenario() {
        let svc = service();
        svc.write(Category::Orders, "Order created");

        assert_eq!(
            svc.logs_for(Category::Orders),
            vec![LogEntry::new("ORDERS", T, "Order created")]
        );
        assert_eq!(
            svc.logs_for(Category::System),
            vec![LogEntry::new("SYSTEM", T, "Order created")]
        );

        let csv = String::from_utf8(svc.csv_bytes(Category::Orders).unwrap()).unwrap();
        assert_eq!(csv, format!("type,time,message\nORDERS,{T},Order created\n"));
    }

    #[test]
    fn test_reset_then_system_write() {
        let svc = service();
        svc.write(Category::Users, "signup");
        svc.reset();
        for &c in Category::all() {
            assert!(svc.logs_for(c).is_empty(), "{c} not empty after reset");
        }

        svc.write(Category::System, "boot");
        assert_eq!(svc.logs_for(Category::System).len(), 1);
        for &c in Category::all().iter().filter(|c| !c.is_system()) {
            assert!(svc.logs_for(c).is_empty(), "{c} was mutated");
        }
    }

    #[test]
    fn test_all_system_logs_equals_system_category() {
        let svc = service();
        svc.write(Category::Machinery, "press 4 online");
        svc.write(Category::System, "heartbeat");
        svc.write(Category::Material, "steel received");
        assert_eq!(svc.all_system_logs(), svc.logs_for(Category::System));
        assert_eq!(svc.all_system_logs().len(), 3);
    }

    #[test]
    fn test_read_copy_is_detached_from_store() {
        let svc = service();
        svc.write(Category::Product, "widget v2");
        let mut copy = svc.logs_for(Category::Product);
        copy.clear();
        assert_eq!(svc.logs_for(Category::Product).len(), 1);
    }

    #[test]
    fn test_export_json_format() {
        let svc = service();
        svc.write(Category::Vendor, "acme onboarded");
        let mut buf = Vec::new();
        let n = svc
            .export(Category::Vendor, ExportFormat::Json { pretty: false }, &mut buf)
            .unwrap();
        assert_eq!(n, 1);
        let parsed: Vec<LogEntry> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, vec![LogEntry::new("VENDOR", T, "acme onboarded")]);
    }

    #[test]
    fn test_export_to_path_writes_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let svc = service();
        svc.write(Category::Orders, "a");
        svc.write(Category::Orders, "b");

        let n = svc
            .export_to_path(Category::Orders, ExportFormat::Csv, &path)
            .unwrap();
        assert_eq!(n, 2);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(!temp_path(&path).exists(), "temp file left behind");
    }

    #[test]
    fn test_export_to_missing_dir_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("orders.csv");
        let svc = service();
        svc.write(Category::Orders, "a");

        let err = svc
            .export_to_path(Category::Orders, ExportFormat::Csv, &path)
            .unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }), "got {err:?}");
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let p = Path::new("/var/out/orders.csv");
        assert_eq!(temp_path(p), Path::new("/var/out/orders.csv.tmp"));
    }

    #[test]
    fn test_concurrent_writes_keep_mirrors_paired() {
        let svc = Arc::new(service());
        let writers: Vec<_> = [Category::Orders, Category::Users, Category::Part]
            .into_iter()
            .map(|c| {
                let svc = Arc::clone(&svc);
                std::thread::spawn(move || {
                    for i in 0..200 {
                        svc.write(c, &format!("{c} {i}"));
                    }
                })
            })
            .collect();

        let reader = {
            let svc = Arc::clone(&svc);
            std::thread::spawn(move || {
                for _ in 0..200 {
                    let counts = svc.counts();
                    let system = counts[Category::System.index()].1;
                    let others: usize = counts
                        .iter()
                        .filter(|(c, _)| !c.is_system())
                        .map(|(_, n)| n)
                        .sum();
                    assert_eq!(system, others, "mirror observed without its entry");
                }
            })
        };

        for w in writers {
            w.join().unwrap();
        }
        reader.join().unwrap();
        assert_eq!(svc.all_system_logs().len(), 600);
    }
}
