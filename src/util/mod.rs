// LogLedger - util/mod.rs
//
// Utility modules: error types, named constants, logging setup.
// Depends on core only for category labels in error messages.

pub mod constants;
pub mod error;
pub mod logging;
