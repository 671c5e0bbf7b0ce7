use std::path::PathBuf;

use thiserror::Error;

/// 分析错误
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A data file does not exist at the resolved path.
    #[error("resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    /// A required column is absent from the input.
    #[error("missing field: {0}")]
    MissingField(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Every token was filtered out, so no n-gram could be counted.
    #[error("empty vocabulary; the documents may only contain stop words")]
    EmptyVocabulary,

    /// The market-data provider could not be reached or answered with garbage.
    #[error("external dependency unavailable: {0}")]
    ExternalDependency(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

impl From<ta::errors::TaError> for AnalysisError {
    fn from(err: ta::errors::TaError) -> Self {
        AnalysisError::InvalidParameter(format!("{:?}", err))
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::ExternalDependency(err.to_string())
    }
}
