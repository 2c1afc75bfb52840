use std::path::PathBuf;

use busy_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested window failed the date-order check.
    #[error(transparent)]
    InvalidWindow(#[from] ModelError),

    /// No dates were given and the table has no rows to default from.
    #[error("no assignments loaded; cannot derive a default date window")]
    EmptyData,

    #[error("failed to serialize dashboard: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// True for errors the user fixes by picking other dates.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidWindow(ModelError::InvalidWindow { .. }))
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
