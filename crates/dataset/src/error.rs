use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Dataset not found at {0}")]
    NotFound(PathBuf),

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Row {row}: release date is missing")]
    MissingDate { row: usize },

    #[error("Row {row}: cannot parse release date '{value}'")]
    InvalidDate { row: usize, value: String },

    #[error("Failed to read dataset: {0}")]
    Read(#[from] PolarsError),
}
