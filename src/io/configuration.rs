//! YAML configuration loading and immutable per-stage config records

use crate::io::error::{PipelineError, Result, file_system_error, invalid_parameter};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the pipeline configuration document
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";
/// Default location of the hyperparameter document
pub const DEFAULT_PARAMS_PATH: &str = "params.yaml";

/// Image file extensions accepted by the preprocessing walk (lowercase)
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

// Raw document schemas; field names follow the YAML documents verbatim
#[derive(Debug, Deserialize)]
struct ConfigDocument {
    artifacts_root: PathBuf,
    data_ingestion: DataIngestionSection,
    prepare_base_model: PrepareBaseModelSection,
    preprocessing: PreprocessingSection,
}

#[derive(Debug, Deserialize)]
struct DataIngestionSection {
    root_dir: PathBuf,
    #[serde(rename = "source_URL")]
    source_url: String,
    local_data_file: PathBuf,
    unzip_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct PrepareBaseModelSection {
    root_dir: PathBuf,
    base_model_path: PathBuf,
    updated_base_model_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct PreprocessingSection {
    root_dir: PathBuf,
    processed_data_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ParamsDocument {
    #[serde(rename = "IMAGE_SIZE")]
    image_size: u32,
    #[serde(rename = "LEARNING_RATE")]
    learning_rate: f64,
    #[serde(rename = "INCLUDE_TOP")]
    include_top: bool,
    #[serde(rename = "WEIGHTS")]
    weights: String,
    #[serde(rename = "CLASSES")]
    classes: u32,
    #[serde(rename = "CLAHE_CLIP")]
    clahe_clip: f64,
    #[serde(rename = "DENOISE_STRENGTH")]
    denoise_strength: f64,
    #[serde(rename = "INTENSITY_RESCALE")]
    intensity_rescale: bool,
}

/// Resolved configuration for the data ingestion stage
#[derive(Debug, Clone)]
pub struct DataIngestionConfig {
    /// Stage working directory
    pub root_dir: PathBuf,
    /// URL of the dataset archive
    pub source_url: String,
    /// Local path the archive is downloaded to
    pub local_data_file: PathBuf,
    /// Directory the archive is extracted into
    pub unzip_dir: PathBuf,
}

/// Resolved configuration for the base model preparation stage
#[derive(Debug, Clone)]
pub struct PrepareBaseModelConfig {
    /// Stage working directory
    pub root_dir: PathBuf,
    /// Destination of the base model plan
    pub base_model_path: PathBuf,
    /// Destination of the classification-head model plan
    pub updated_base_model_path: PathBuf,
    /// Square input dimension expected by the model
    pub image_size: u32,
    /// Optimizer learning rate
    pub learning_rate: f64,
    /// Whether the pretrained classification head is kept
    pub include_top: bool,
    /// Pretrained weight set identifier
    pub weights: String,
    /// Number of target classes
    pub classes: u32,
}

/// Resolved configuration for the preprocessing stage
#[derive(Debug, Clone)]
pub struct PreprocessingConfig {
    /// Root directory of class-labeled input images
    pub root_dir: PathBuf,
    /// Output directory mirroring the input tree
    pub processed_data_path: PathBuf,
    /// CLAHE clip limit, must be positive
    pub clahe_clip: f64,
    /// Non-local-means filter strength, zero disables smoothing
    pub denoise_strength: f64,
    /// Whether min-max intensity rescaling is applied after denoising
    pub intensity_rescale: bool,
}

/// Loads the two configuration documents and materializes per-stage records
///
/// Both documents are read once at construction; each stage accessor creates
/// that stage's root directory before returning its immutable record.
#[derive(Debug)]
pub struct ConfigurationManager {
    config: ConfigDocument,
    params: ParamsDocument,
}

impl ConfigurationManager {
    /// Load both configuration documents and create the artifacts root
    ///
    /// # Errors
    ///
    /// Returns an error if either document cannot be read or parsed, or if
    /// the artifacts root directory cannot be created
    pub fn from_files(config_path: &Path, params_path: &Path) -> Result<Self> {
        let config: ConfigDocument = read_yaml(config_path)?;
        let params: ParamsDocument = read_yaml(params_path)?;

        create_directories(&[&config.artifacts_root])?;

        Ok(Self { config, params })
    }

    /// Resolve the data ingestion configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the stage root directory cannot be created
    pub fn data_ingestion_config(&self) -> Result<DataIngestionConfig> {
        let section = &self.config.data_ingestion;
        create_directories(&[&section.root_dir])?;

        Ok(DataIngestionConfig {
            root_dir: section.root_dir.clone(),
            source_url: section.source_url.clone(),
            local_data_file: section.local_data_file.clone(),
            unzip_dir: section.unzip_dir.clone(),
        })
    }

    /// Resolve and validate the base model preparation configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the stage root directory cannot be created or a
    /// hyperparameter fails validation
    pub fn prepare_base_model_config(&self) -> Result<PrepareBaseModelConfig> {
        let section = &self.config.prepare_base_model;
        let params = &self.params;
        create_directories(&[&section.root_dir])?;

        if params.image_size == 0 {
            return Err(invalid_parameter(
                "IMAGE_SIZE",
                &params.image_size,
                &"must be positive",
            ));
        }
        if params.learning_rate <= 0.0 {
            return Err(invalid_parameter(
                "LEARNING_RATE",
                &params.learning_rate,
                &"must be positive",
            ));
        }
        if params.classes < 2 {
            return Err(invalid_parameter(
                "CLASSES",
                &params.classes,
                &"classification requires at least two classes",
            ));
        }

        Ok(PrepareBaseModelConfig {
            root_dir: section.root_dir.clone(),
            base_model_path: section.base_model_path.clone(),
            updated_base_model_path: section.updated_base_model_path.clone(),
            image_size: params.image_size,
            learning_rate: params.learning_rate,
            include_top: params.include_top,
            weights: params.weights.clone(),
            classes: params.classes,
        })
    }

    /// Resolve and validate the preprocessing configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the stage root directory cannot be created, the
    /// CLAHE clip limit is not positive, or the denoise strength is negative
    pub fn preprocessing_config(&self) -> Result<PreprocessingConfig> {
        let section = &self.config.preprocessing;
        let params = &self.params;
        create_directories(&[&section.root_dir])?;

        if params.clahe_clip <= 0.0 {
            return Err(invalid_parameter(
                "CLAHE_CLIP",
                &params.clahe_clip,
                &"must be positive",
            ));
        }
        if params.denoise_strength < 0.0 {
            return Err(invalid_parameter(
                "DENOISE_STRENGTH",
                &params.denoise_strength,
                &"must not be negative",
            ));
        }

        Ok(PreprocessingConfig {
            root_dir: section.root_dir.clone(),
            processed_data_path: section.processed_data_path.clone(),
            clahe_clip: params.clahe_clip,
            denoise_strength: params.denoise_strength,
            intensity_rescale: params.intensity_rescale,
        })
    }
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|e| PipelineError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_yaml::from_str(&contents).map_err(|e| PipelineError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Create every listed directory, including missing parents
///
/// # Errors
///
/// Returns an error if any directory cannot be created
pub fn create_directories<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|e| file_system_error(path, "create directory", e))?;
    }
    Ok(())
}
