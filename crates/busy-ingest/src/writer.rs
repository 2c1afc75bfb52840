//! Writing the assignment flat file.

use std::io::Write;
use std::path::Path;

use busy_model::{AssignmentTable, DATE_FORMAT};
use csv::WriterBuilder;
use tracing::info;

use crate::error::{IngestError, Result};
use crate::reader::{END_COLUMN, PROJECT_COLUMN, RESOURCES_COLUMN, START_COLUMN};

/// Write assignments to `path`, replacing any existing file.
///
/// The layout matches what [`crate::read_assignments`] expects: a leading
/// unnamed index column, ISO dates and a `", "`-joined resources cell.
pub fn write_assignments(path: &Path, table: &AssignmentTable) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    write_assignments_to(file, table, path)?;
    info!(
        path = %path.display(),
        assignments = table.len(),
        "wrote assignments"
    );
    Ok(())
}

/// Write assignments to any writer. `path` is only used in error messages.
pub fn write_assignments_to<W: Write>(
    writer: W,
    table: &AssignmentTable,
    path: &Path,
) -> Result<()> {
    let to_error = |e: csv::Error| IngestError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer
        .write_record(["", PROJECT_COLUMN, START_COLUMN, END_COLUMN, RESOURCES_COLUMN])
        .map_err(to_error)?;
    for (index, assignment) in table.assignments.iter().enumerate() {
        writer
            .write_record([
                index.to_string(),
                assignment.project().to_string(),
                assignment.start().format(DATE_FORMAT).to_string(),
                assignment.end().format(DATE_FORMAT).to_string(),
                assignment.resources_label(),
            ])
            .map_err(to_error)?;
    }
    writer.flush().map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
