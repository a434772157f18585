//! # Catalog Server Library
//!
//! Startup pieces of the catalog server: logging, dependency wiring and the
//! HTTP serve loop. The binary in `main.rs` only strings them together.

pub mod app;
pub mod di;
pub mod logging;
