// LogLedger - core/store.rs
//
// Partitioned append-only store: one ordered sequence per category.
// Core layer: no locking here. Callers that share a store across threads
// wrap it (see app::service).

use crate::core::model::{Category, LogEntry};

/// Category → insertion-ordered entries.
///
/// Backed by a fixed array indexed by [`Category::index`], so every
/// category has a sequence from construction onwards and a missing
/// category is unrepresentable.
#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    logs: [Vec<LogEntry>; Category::COUNT],
}

impl CategoryStore {
    /// Create a store with every category empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-empty every category.
    pub fn reset(&mut self) {
        for seq in &mut self.logs {
            seq.clear();
        }
    }

    /// Append to the tail of `category`'s sequence.
    pub fn append(&mut self, category: Category, entry: LogEntry) {
        self.logs[category.index()].push(entry);
    }

    /// Entries for `category`, oldest first.
    pub fn read(&self, category: Category) -> &[LogEntry] {
        &self.logs[category.index()]
    }

    pub fn len(&self, category: Category) -> usize {
        self.logs[category.index()].len()
    }

    /// Total entries across all categories, mirrors included.
    pub fn total_len(&self) -> usize {
        self.logs.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.iter().all(Vec::is_empty)
    }

    /// Per-category entry counts in slot order.
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::all()
            .iter()
            .map(|&c| (c, self.len(c)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, message: &str) -> LogEntry {
        LogEntry::new(label, "2024-03-01T09:15:02Z", message)
    }

    #[test]
    fn test_new_store_is_empty_for_every_category() {
        let store = CategoryStore::new();
        for &c in Category::all() {
            assert!(store.read(c).is_empty(), "{c} should start empty");
        }
        assert!(store.is_empty());
        assert_eq!(store.total_len(), 0);
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = CategoryStore::new();
        store.append(Category::Orders, entry("ORDERS", "first"));
        store.append(Category::Orders, entry("ORDERS", "second"));
        store.append(Category::Orders, entry("ORDERS", "third"));

        let messages: Vec<_> = store
            .read(Category::Orders)
            .iter()
            .map(LogEntry::message)
            .collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn test_append_touches_only_target_category() {
        let mut store = CategoryStore::new();
        store.append(Category::Part, entry("PART", "bolt"));

        for &c in Category::all() {
            let expected = usize::from(c == Category::Part);
            assert_eq!(store.len(c), expected, "unexpected count for {c}");
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut store = CategoryStore::new();
        store.append(Category::Users, entry("USERS", "signup"));
        store.append(Category::System, entry("SYSTEM", "signup"));

        store.reset();
        assert!(store.is_empty());
        store.reset();
        assert!(store.is_empty());

        // Still usable after reset.
        store.append(Category::Users, entry("USERS", "again"));
        assert_eq!(store.len(Category::Users), 1);
    }

    #[test]
    fn test_counts_cover_all_categories() {
        let mut store = CategoryStore::new();
        store.append(Category::Vendor, entry("VENDOR", "a"));
        store.append(Category::Vendor, entry("VENDOR", "b"));

        let counts = store.counts();
        assert_eq!(counts.len(), Category::COUNT);
        assert!(counts.contains(&(Category::Vendor, 2)));
        assert!(counts.contains(&(Category::System, 0)));
        assert_eq!(store.total_len(), 2);
    }
}
