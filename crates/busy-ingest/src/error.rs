//! Error types for assignment file ingestion.

use std::path::PathBuf;

use busy_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading or writing the assignment file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write the output file.
    #[error("failed to write file {path}: {message}")]
    FileWrite { path: PathBuf, message: String },

    // === CSV Parsing Errors ===
    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Cell could not be parsed as a date.
    #[error("invalid date '{value}' in column '{column}' at row {row} of {path}")]
    InvalidDate {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    /// Row violates an assignment invariant.
    #[error("invalid assignment at row {row} of {path}: {source}")]
    InvalidRecord {
        path: PathBuf,
        row: usize,
        #[source]
        source: ModelError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
