use busy_ingest::IngestError;
use busy_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("cannot generate {requested} records from {available} project names")]
    TooManyRecords { requested: usize, available: usize },

    #[error("cannot pick {requested} distinct start dates from {available} days in {year}")]
    TooManyDays {
        year: i32,
        requested: usize,
        available: usize,
    },

    #[error("cannot pick {requested} distinct resources from a pool of {available}")]
    TooManyResources { requested: usize, available: usize },

    #[error("minimum offset {min} exceeds maximum offset {max}")]
    InvalidOffsetRange { min: u32, max: u32 },

    #[error("year {0} is outside the supported calendar")]
    InvalidYear(i32),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Write(#[from] IngestError),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
