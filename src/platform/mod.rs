// LogLedger - platform/mod.rs
//
// Platform abstraction layer: config directory resolution and config.toml.
// Dependencies: directories crate, app (export format type).

pub mod config;
