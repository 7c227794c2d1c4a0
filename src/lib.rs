// LogLedger - lib.rs
//
// Library entry point. The CLI harness in `main.rs` is a thin client of
// this surface; embedding applications construct an `app::service::LogService`
// directly.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
