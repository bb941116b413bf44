//! Input/output operations and error handling

/// Command-line argument parsing
pub mod cli;
/// YAML configuration documents and per-stage config records
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Grayscale image loading and verified export
pub mod image;
/// Progress bar management for batch operations
pub mod progress;
