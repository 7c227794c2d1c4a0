// LogLedger - app/mod.rs
//
// Application layer: the shared, locked service and input ingestion.
// Dependencies: core layer.

pub mod ingest;
pub mod service;
