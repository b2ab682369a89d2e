//! Input/output, configuration and error handling around texture creation

/// Command-line parsing and job execution
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Injected warning and debug sinks
pub mod diagnostics;
/// Error types shared across the crate
pub mod error;
/// Sample decoding and texture export
pub mod image;
/// Progress display for sample-group processing
pub mod progress;
/// Best-effort debug snapshots of intermediate bitmaps
pub mod snapshot;
