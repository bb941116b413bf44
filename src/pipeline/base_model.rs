//! Base model preparation stage: resolved model plan materialization

use crate::io::configuration::{ConfigurationManager, PrepareBaseModelConfig};
use crate::io::error::{PipelineError, Result, file_system_error};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Resolved classification model settings, written for the training stage
///
/// Defining or training the network itself is out of scope here; the stage
/// records the contract a downstream trainer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct ModelPlan {
    /// Pretrained weight set the backbone starts from
    pub weights: String,
    /// Square input dimension expected by the model
    pub image_size: u32,
    /// Whether the pretrained classification head is kept
    pub include_top: bool,
    /// Number of output classes
    pub classes: u32,
    /// Optimizer learning rate
    pub learning_rate: f64,
}

/// Stage orchestrator for base model preparation
#[derive(Debug)]
pub struct PrepareBaseModelStage {
    config: PrepareBaseModelConfig,
}

impl PrepareBaseModelStage {
    /// Resolve and validate the stage configuration from the manager
    ///
    /// # Errors
    ///
    /// Returns an error if the stage root directory cannot be created or a
    /// hyperparameter fails validation
    pub fn from_manager(manager: &ConfigurationManager) -> Result<Self> {
        Ok(Self {
            config: manager.prepare_base_model_config()?,
        })
    }

    /// Write the base model plan, then the classification-head variant
    ///
    /// # Errors
    ///
    /// Returns an error if either plan cannot be serialized or written
    pub fn run(&self) -> Result<()> {
        let base_plan = ModelPlan {
            weights: self.config.weights.clone(),
            image_size: self.config.image_size,
            include_top: self.config.include_top,
            classes: self.config.classes,
            learning_rate: self.config.learning_rate,
        };
        write_plan(&base_plan, &self.config.base_model_path)?;

        // The updated plan swaps the pretrained head for the dataset's classes
        let updated_plan = ModelPlan {
            include_top: false,
            ..base_plan
        };
        write_plan(&updated_plan, &self.config.updated_base_model_path)?;

        info!(
            "Model plans written to '{}' and '{}'",
            self.config.base_model_path.display(),
            self.config.updated_base_model_path.display()
        );
        Ok(())
    }
}

fn write_plan(plan: &ModelPlan, path: &Path) -> Result<()> {
    let document = serde_yaml::to_string(plan).map_err(|e| PipelineError::PlanSerialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| file_system_error(parent, "create directory", e))?;
    }
    fs::write(path, document).map_err(|e| file_system_error(path, "write model plan", e))
}
