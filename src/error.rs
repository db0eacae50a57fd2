use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("usage: evochart <RUN_LOG.csv> [--config <FILE>]")]
    Usage,

    #[error("File {} not found.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Run log contains no records")]
    EmptyInput,

    #[error("Non-positive {series} value {value} at generation {generation} cannot be drawn on a log axis")]
    NonPositiveScore {
        series: &'static str,
        generation: u64,
        value: f64,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Viewer error: {0}")]
    Viewer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, ChartError>;
