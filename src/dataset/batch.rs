//! Error-tolerant walk applying the enhancement chain across class folders

use crate::enhance::Preprocessor;
use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::image::save_with_verification;
use crate::io::progress::ProgressManager;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Run counters accumulated across one directory walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Images processed and written successfully
    pub processed: usize,
    /// Images that failed to load, decode, or write
    pub errors: usize,
}

/// Check whether a path carries a supported image extension
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Apply the enhancement chain to every image beneath `input_root`
///
/// Immediate subdirectories of `input_root` are treated as class folders and
/// mirrored into `output_root` at the same relative file names. Listings are
/// sorted ascending by name so output ordering is reproducible. Each image
/// failure is logged and counted without aborting the batch; batch-level
/// problems (missing input root, no class folders) return zero counters
/// without touching the output tree. The walk itself never fails.
pub fn process_directory(
    preprocessor: &Preprocessor,
    input_root: &Path,
    output_root: &Path,
    progress: &ProgressManager,
) -> WalkSummary {
    info!("Starting to process images from '{}'", input_root.display());

    if !input_root.is_dir() {
        error!("Input directory does not exist: '{}'", input_root.display());
        return WalkSummary::default();
    }

    let class_folders = sorted_entries(input_root, Path::is_dir);
    if class_folders.is_empty() {
        error!("No class folders found in '{}'", input_root.display());
        return WalkSummary::default();
    }

    let mut summary = WalkSummary::default();

    for class_path in &class_folders {
        let class_name = class_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        let output_class_path = output_root.join(&class_name);

        // Mirrored even when the class contributes zero images
        if let Err(source) = fs::create_dir_all(&output_class_path) {
            error!(
                "Failed to create output folder '{}': {source}",
                output_class_path.display()
            );
        }

        let image_files = sorted_entries(class_path, |path| path.is_file() && is_supported_image(path));
        info!(
            "Processing class '{class_name}' ({} images)",
            image_files.len()
        );

        let bar = progress.class_bar(&class_name, image_files.len());
        for input_path in &image_files {
            let output_path = output_class_path.join(input_path.file_name().unwrap_or_default());

            let outcome = preprocessor
                .process_image(input_path)
                .and_then(|image| save_with_verification(&image, &output_path));

            match outcome {
                Ok(()) => summary.processed += 1,
                Err(source) => {
                    error!("Error processing '{}': {source}", input_path.display());
                    summary.errors += 1;
                }
            }
            bar.inc(1);
        }
        bar.finish();
    }

    info!(
        "Processing complete! Processed {} images with {} errors",
        summary.processed, summary.errors
    );

    summary
}

// Listing order is filesystem-dependent; sorting keeps runs reproducible
fn sorted_entries(directory: &Path, keep: impl Fn(&Path) -> bool) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(directory) else {
        error!("Failed to list directory '{}'", directory.display());
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| keep(path))
        .collect();
    paths.sort_unstable();
    paths
}
