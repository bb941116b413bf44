//! Grayscale image loading and verified export

use crate::io::error::{PipelineError, Result, file_system_error};
use image::GrayImage;
use std::path::Path;

/// Load an image from disk as single-channel 8-bit grayscale
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist
/// - The file cannot be decoded as an image
pub fn load_grayscale(path: &Path) -> Result<GrayImage> {
    if !path.exists() {
        return Err(PipelineError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|e| PipelineError::ImageDecode {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(img.to_luma8())
}

/// Save a processed image, creating its parent directory on demand
///
/// After the write the file's existence is verified; a missing file is
/// logged at error level but does not fail the call, so one unverifiable
/// write never aborts a batch.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded to the output path
pub fn save_with_verification(image: &GrayImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    image
        .save(output_path)
        .map_err(|e| PipelineError::ImageEncode {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    if !output_path.exists() {
        tracing::error!("Image was not saved to '{}'", output_path.display());
    }

    Ok(())
}
