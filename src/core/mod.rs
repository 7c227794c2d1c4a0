// LogLedger - core/mod.rs
//
// Core store logic: categories, entries, the partitioned store, the
// mirror-write rule, and export rendering.
// Must NOT depend on: app or platform. No locking at this layer.

pub mod clock;
pub mod export;
pub mod model;
pub mod store;
pub mod writer;
