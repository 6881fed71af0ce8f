//! Error types for loading the CV document.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the CV data document.
#[derive(Debug, Error)]
pub enum CvError {
    #[error("failed to read CV data from `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CV data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CV data failed validation: {}", .0.join("; "))]
    Validation(Vec<String>),
}

pub type CvResult<T> = Result<T, CvError>;
