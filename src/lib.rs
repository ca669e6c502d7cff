// Library target exists solely for the integration tests in tests/.
// The binary entry point is main.rs; this file re-declares the module tree so
// the test harness can import types via `ruslingo::session::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by integration tests
pub mod catalog;
pub mod quiz;
pub mod session;
pub mod translate;

// Private: the rest of the app, compiled here so both targets share one tree
mod app;
mod config;
mod ui;
