//! Data ingestion stage: dataset archive download and extraction

use crate::io::configuration::{ConfigurationManager, DataIngestionConfig};
use crate::io::error::{PipelineError, Result, file_system_error};
use std::fs;
use tracing::info;

/// Stage orchestrator for dataset download and extraction
#[derive(Debug)]
pub struct DataIngestionStage {
    config: DataIngestionConfig,
}

impl DataIngestionStage {
    /// Resolve the stage configuration from the manager
    ///
    /// # Errors
    ///
    /// Returns an error if the stage root directory cannot be created
    pub fn from_manager(manager: &ConfigurationManager) -> Result<Self> {
        Ok(Self {
            config: manager.data_ingestion_config()?,
        })
    }

    /// Download the dataset archive if absent, then extract it
    ///
    /// Extraction always runs and overwrites existing entries, which keeps
    /// the stage idempotent over repeated pipeline runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the download fails, the archive cannot be opened
    /// or extracted, or a filesystem operation fails
    pub fn run(&self) -> Result<()> {
        if self.config.local_data_file.exists() {
            info!(
                "Archive already present at '{}', skipping download",
                self.config.local_data_file.display()
            );
        } else {
            self.download_archive()?;
        }

        self.extract_archive()
    }

    fn download_archive(&self) -> Result<()> {
        info!("Downloading dataset from '{}'", self.config.source_url);

        let download_error = |source| PipelineError::Download {
            url: self.config.source_url.clone(),
            source,
        };
        let response = reqwest::blocking::get(&self.config.source_url)
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(download_error)?;
        let bytes = response.bytes().map_err(download_error)?;

        if let Some(parent) = self.config.local_data_file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }
        fs::write(&self.config.local_data_file, &bytes)
            .map_err(|e| file_system_error(&self.config.local_data_file, "write archive", e))?;

        info!(
            "Saved dataset archive to '{}'",
            self.config.local_data_file.display()
        );
        Ok(())
    }

    fn extract_archive(&self) -> Result<()> {
        let archive_path = &self.config.local_data_file;
        let archive_error = |source| PipelineError::Archive {
            path: archive_path.clone(),
            source,
        };

        let file = fs::File::open(archive_path)
            .map_err(|e| file_system_error(archive_path, "open archive", e))?;
        let mut archive = zip::ZipArchive::new(file).map_err(archive_error)?;

        fs::create_dir_all(&self.config.unzip_dir)
            .map_err(|e| file_system_error(&self.config.unzip_dir, "create directory", e))?;
        archive.extract(&self.config.unzip_dir).map_err(archive_error)?;

        info!(
            "Extracted {} archive entries into '{}'",
            archive.len(),
            self.config.unzip_dir.display()
        );
        Ok(())
    }
}
