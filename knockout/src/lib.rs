// THEORY:
// This file is the main entry point for the `knockout` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like the `knockout_cli` runner).
//
// The primary goal is to export the `BackgroundRemover` and its associated data
// structures (`RemoverConfig`, `RemovalReport`, `RemoverError`) as the clean,
// high-level interface for the whole tool. The per-pixel machinery lives in
// `core_modules` and is public for callers that want to drive a single stage.

pub mod config;
pub mod core_modules;
pub mod error;
pub mod pipeline;

pub use config::RemoverConfig;
pub use error::{RemoverError, Result};
pub use pipeline::{BackgroundRemover, RemovalReport, remove_white_background};
