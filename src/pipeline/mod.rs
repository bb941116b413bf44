//! Sequential stage orchestration with uniform banner logging
//!
//! Stages run in a fixed order; the first stage failure aborts the whole run
//! with no partial-stage resume.

/// Base model preparation stage
pub mod base_model;
/// Dataset download and extraction stage
pub mod ingestion;
/// Batch image preprocessing stage
pub mod preprocessing;

use crate::io::cli::Cli;
use crate::io::configuration::ConfigurationManager;
use crate::io::error::Result;
use tracing::{error, info};

/// Run all pipeline stages in execution order
///
/// # Errors
///
/// Returns the first stage error encountered; per-image failures inside the
/// preprocessing walk are recovered there and never surface here
pub fn run(cli: &Cli) -> Result<()> {
    let manager = ConfigurationManager::from_files(&cli.config, &cli.params)?;

    run_stage("Data Ingestion", || {
        ingestion::DataIngestionStage::from_manager(&manager)?.run()
    })?;

    run_stage("Prepare Base Model", || {
        base_model::PrepareBaseModelStage::from_manager(&manager)?.run()
    })?;

    run_stage("Preprocessing", || {
        let stage =
            preprocessing::PreprocessingStage::from_manager(&manager, cli.should_show_progress())?;
        let summary = stage.run();
        info!(
            "Preprocessed {} images with {} errors",
            summary.processed, summary.errors
        );
        Ok(())
    })
}

fn run_stage(name: &str, stage: impl FnOnce() -> Result<()>) -> Result<()> {
    info!(">>>> Stage {name} started <<<<");
    match stage() {
        Ok(()) => {
            info!(">>>> Stage {name} completed <<<<");
            Ok(())
        }
        Err(source) => {
            error!("Stage {name} failed: {source}");
            Err(source)
        }
    }
}
