//! Config-driven enhancement chain applied to single images

use crate::enhance::{clahe, nlmeans, rescale};
use crate::io::configuration::PreprocessingConfig;
use crate::io::error::Result;
use crate::io::image::load_grayscale;
use image::GrayImage;
use std::path::Path;

/// Applies the fixed three-step enhancement chain to single images
///
/// Owns its immutable stage configuration for the duration of one run; the
/// chain is a pure function of (path, config) apart from the disk read.
#[derive(Debug)]
pub struct Preprocessor {
    config: PreprocessingConfig,
}

impl Preprocessor {
    /// Create a preprocessor owning its resolved stage configuration
    pub const fn new(config: PreprocessingConfig) -> Self {
        Self { config }
    }

    /// The resolved configuration driving the chain
    pub const fn config(&self) -> &PreprocessingConfig {
        &self.config
    }

    /// Load an image and run contrast enhancement, denoising, and the
    /// optional intensity rescale
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input path does not exist
    /// - The file cannot be decoded as a grayscale image
    pub fn process_image(&self, path: &Path) -> Result<GrayImage> {
        let image = load_grayscale(path)?;

        let image = clahe::apply_clahe(&image, self.config.clahe_clip);
        let image = nlmeans::denoise(&image, self.config.denoise_strength);

        if self.config.intensity_rescale {
            Ok(rescale::rescale_intensity(&image))
        } else {
            Ok(image)
        }
    }
}
