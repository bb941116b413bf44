//! Command-line interface for the staged preprocessing pipeline

use crate::io::configuration::{DEFAULT_CONFIG_PATH, DEFAULT_PARAMS_PATH};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the pipeline driver
#[derive(Parser, Debug)]
#[command(name = "lithoprep")]
#[command(
    author,
    version,
    about = "Prepare kidney-stone X-ray datasets for classification training"
)]
pub struct Cli {
    /// Pipeline configuration document
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Hyperparameter document
    #[arg(short, long, default_value = DEFAULT_PARAMS_PATH)]
    pub params: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}
