//! Batch tool: command line, file handling, reporting and errors

/// Command-line parsing and batch processing
pub mod cli;
/// Defaults and naming constants
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and JPEG export
pub mod image;
/// Console progress display
pub mod progress;
