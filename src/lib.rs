//! Staged data-preparation pipeline for kidney-stone X-ray classification
//!
//! Raw radiographs are ingested from a remote archive, the base model's
//! resolved hyperparameters are materialized, and every image passes through
//! a deterministic enhancement chain (CLAHE contrast enhancement,
//! non-local-means denoising, optional min-max intensity rescale) into an
//! output tree that mirrors the class-labeled input layout.

#![forbid(unsafe_code)]

/// Class-folder dataset walking with per-item error tolerance
pub mod dataset;
/// Per-image enhancement chain: contrast, denoising, intensity rescale
pub mod enhance;
/// Input/output operations and error handling
pub mod io;
/// Stage orchestration for the sequential pipeline
pub mod pipeline;

pub use io::error::{PipelineError, Result};
