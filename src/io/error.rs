//! Error types for configuration, image, and stage operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum PipelineError {
    /// Failed to read a configuration document from disk
    ConfigRead {
        /// Path to the configuration document
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration document exists but is not valid YAML for its schema
    ConfigParse {
        /// Path to the configuration document
        path: PathBuf,
        /// Underlying deserialization error
        source: serde_yaml::Error,
    },

    /// Hyperparameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Referenced image path does not exist at process time
    InputNotFound {
        /// Path that was expected to exist
        path: PathBuf,
    },

    /// File exists but cannot be decoded as a grayscale image
    ImageDecode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode a processed image to disk
    ImageEncode {
        /// Path where encoding was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to fetch the dataset archive
    Download {
        /// URL the download was attempted from
        url: String,
        /// Underlying HTTP error
        source: reqwest::Error,
    },

    /// Failed to open or extract the dataset archive
    Archive {
        /// Path to the archive file
        path: PathBuf,
        /// Underlying archive error
        source: zip::result::ZipError,
    },

    /// Failed to serialize a model plan document
    PlanSerialize {
        /// Path the plan was being written to
        path: PathBuf,
        /// Underlying serialization error
        source: serde_yaml::Error,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigRead { path, source } => {
                write!(f, "Failed to read config '{}': {source}", path.display())
            }
            Self::ConfigParse { path, source } => {
                write!(f, "Failed to parse config '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InputNotFound { path } => {
                write!(f, "Input image not found at '{}'", path.display())
            }
            Self::ImageDecode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::ImageEncode { path, source } => {
                write!(
                    f,
                    "Failed to encode image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Download { url, source } => {
                write!(f, "Failed to download '{url}': {source}")
            }
            Self::Archive { path, source } => {
                write!(
                    f,
                    "Failed to extract archive '{}': {source}",
                    path.display()
                )
            }
            Self::PlanSerialize { path, source } => {
                write!(
                    f,
                    "Failed to serialize model plan for '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ConfigParse { source, .. } | Self::PlanSerialize { source, .. } => Some(source),
            Self::ImageDecode { source, .. } | Self::ImageEncode { source, .. } => Some(source),
            Self::Download { source, .. } => Some(source),
            Self::Archive { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::InputNotFound { .. } => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, PipelineError>;

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PipelineError {
    PipelineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for a specific path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PipelineError {
    PipelineError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
