//! Preprocessing stage: batch enhancement of the ingested dataset

use crate::dataset::{WalkSummary, process_directory};
use crate::enhance::Preprocessor;
use crate::io::configuration::ConfigurationManager;
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use tracing::info;

/// Stage orchestrator for batch image preprocessing
#[derive(Debug)]
pub struct PreprocessingStage {
    preprocessor: Preprocessor,
    show_progress: bool,
}

impl PreprocessingStage {
    /// Resolve and validate the stage configuration from the manager
    ///
    /// # Errors
    ///
    /// Returns an error if the stage root directory cannot be created or an
    /// enhancement parameter fails validation
    pub fn from_manager(manager: &ConfigurationManager, show_progress: bool) -> Result<Self> {
        Ok(Self {
            preprocessor: Preprocessor::new(manager.preprocessing_config()?),
            show_progress,
        })
    }

    /// Walk the configured input root into the processed output tree
    pub fn run(&self) -> WalkSummary {
        let config = self.preprocessor.config();
        info!("Input directory: '{}'", config.root_dir.display());
        info!(
            "Output directory: '{}'",
            config.processed_data_path.display()
        );

        let progress = ProgressManager::new(self.show_progress);
        let summary = process_directory(
            &self.preprocessor,
            &config.root_dir,
            &config.processed_data_path,
            &progress,
        );
        progress.finish();
        summary
    }
}
