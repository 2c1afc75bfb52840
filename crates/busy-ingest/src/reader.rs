//! Reading the assignment flat file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use busy_model::{Assignment, AssignmentTable, ResourceTable, split_resources};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::{debug, info, warn};

use crate::dates::parse_date;
use crate::error::{IngestError, Result};

pub const PROJECT_COLUMN: &str = "Project Name";
pub const START_COLUMN: &str = "Start Date";
pub const END_COLUMN: &str = "End Date";
pub const RESOURCES_COLUMN: &str = "Resources";

/// Column positions of the four assignment fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    project: usize,
    start: usize,
    end: usize,
    resources: usize,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn find_column(headers: &[String], names: &[&str], path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|header| names.iter().any(|name| header.eq_ignore_ascii_case(name)))
        .ok_or_else(|| IngestError::MissingColumn {
            column: names[0].to_string(),
            path: path.to_path_buf(),
        })
}

fn map_columns(headers: &[String], path: &Path) -> Result<ColumnMap> {
    Ok(ColumnMap {
        project: find_column(headers, &[PROJECT_COLUMN, "Project"], path)?,
        start: find_column(headers, &[START_COLUMN], path)?,
        end: find_column(headers, &[END_COLUMN], path)?,
        resources: find_column(headers, &[RESOURCES_COLUMN, "Resource"], path)?,
    })
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Read assignments from a CSV file on disk.
///
/// # Errors
///
/// Fails when the file is missing or unreadable, a required column is absent,
/// a date cell does not parse, or a row ends before it starts.
pub fn read_assignments(path: &Path) -> Result<AssignmentTable> {
    let file = open_file(path)?;
    let table = read_assignments_from(file, path)?;
    info!(
        path = %path.display(),
        assignments = table.len(),
        "loaded assignments"
    );
    Ok(table)
}

/// Read assignments from any reader. `path` is only used in error messages.
pub fn read_assignments_from<R: Read>(reader: R, path: &Path) -> Result<AssignmentTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut columns: Option<ColumnMap> = None;
    let mut assignments = Vec::new();
    let mut row_number = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        let Some(map) = columns else {
            let headers: Vec<String> = record.iter().map(normalize_header).collect();
            let map = map_columns(&headers, path)?;
            debug!(?map, "resolved assignment columns");
            columns = Some(map);
            continue;
        };
        row_number += 1;
        assignments.push(parse_row(&row, map, row_number, path)?);
    }
    if columns.is_none() {
        return Err(IngestError::MissingColumn {
            column: PROJECT_COLUMN.to_string(),
            path: path.to_path_buf(),
        });
    }
    Ok(AssignmentTable::new(assignments))
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn date_cell(
    row: &[String],
    index: usize,
    column: &str,
    row_number: usize,
    path: &Path,
) -> Result<NaiveDate> {
    let value = cell(row, index);
    parse_date(value).ok_or_else(|| IngestError::InvalidDate {
        path: path.to_path_buf(),
        row: row_number,
        column: column.to_string(),
        value: value.to_string(),
    })
}

fn parse_row(row: &[String], map: ColumnMap, row_number: usize, path: &Path) -> Result<Assignment> {
    let start = date_cell(row, map.start, START_COLUMN, row_number, path)?;
    let end = date_cell(row, map.end, END_COLUMN, row_number, path)?;
    let project = cell(row, map.project);
    let resources = split_resources(cell(row, map.resources));
    if resources.is_empty() {
        warn!(row = row_number, project, "assignment lists no resources");
    }
    Assignment::new(project, start, end, resources).map_err(|source| {
        IngestError::InvalidRecord {
            path: path.to_path_buf(),
            row: row_number,
            source,
        }
    })
}

/// Load the flat file and explode it into one row per resource.
pub fn load_resource_table(path: &Path) -> Result<ResourceTable> {
    let assignments = read_assignments(path)?;
    let long = assignments.to_long();
    debug!(
        assignments = assignments.len(),
        rows = long.len(),
        "normalized assignments to long format"
    );
    Ok(long)
}
