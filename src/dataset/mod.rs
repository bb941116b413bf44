//! Class-folder dataset walking
//!
//! The input tree is `<root>/<class>/<image>`; each class folder's images are
//! processed independently with per-item error isolation.

/// Batch directory walk and run counters
pub mod batch;

pub use batch::{WalkSummary, is_supported_image, process_directory};
