//! Deterministic per-image enhancement chain
//!
//! Every operation is dimension-preserving and operates on single-channel
//! 8-bit grayscale images.

/// Config-driven chain orchestration for single images
pub mod chain;
/// Contrast-limited adaptive histogram equalization
pub mod clahe;
/// Non-local-means denoising
pub mod nlmeans;
/// Linear min-max intensity normalization
pub mod rescale;

pub use chain::Preprocessor;
