use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::window::{DateWindow, inclusive_days};

/// Separator used when resources are serialized into a single cell.
pub const RESOURCE_SEPARATOR: &str = ", ";

/// One project's resourcing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    project: String,
    start: NaiveDate,
    end: NaiveDate,
    resources: Vec<String>,
}

impl Assignment {
    pub fn new(
        project: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        resources: Vec<String>,
    ) -> Result<Self> {
        let project = project.into();
        if project.trim().is_empty() {
            return Err(ModelError::EmptyProject);
        }
        if start > end {
            return Err(ModelError::EndBeforeStart {
                project,
                start,
                end,
            });
        }
        Ok(Self {
            project,
            start,
            end,
            resources,
        })
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Resources joined the way they are stored in the flat file.
    pub fn resources_label(&self) -> String {
        self.resources.join(RESOURCE_SEPARATOR)
    }

    pub fn duration_days(&self) -> i64 {
        inclusive_days(self.start, self.end)
    }

    /// One long-format row per listed resource, in list order.
    pub fn explode(&self, assignment: usize) -> impl Iterator<Item = ResourceRow> + '_ {
        self.resources.iter().map(move |resource| ResourceRow {
            assignment,
            project: self.project.clone(),
            start: self.start,
            end: self.end,
            resource: resource.clone(),
        })
    }
}

impl<'de> Deserialize<'de> for Assignment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            project: String,
            start: NaiveDate,
            end: NaiveDate,
            #[serde(default)]
            resources: Vec<String>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Assignment::new(raw.project, raw.start, raw.end, raw.resources)
            .map_err(serde::de::Error::custom)
    }
}

/// Split a serialized resources cell into names.
///
/// Empty entries are dropped so a blank cell yields no resources.
pub fn split_resources(raw: &str) -> Vec<String> {
    raw.split(RESOURCE_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Long-format row: an assignment restricted to a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRow {
    /// Position of the source assignment in its table.
    pub assignment: usize,
    pub project: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub resource: String,
}

impl ResourceRow {
    /// Inclusive day count of the row.
    pub fn duration_days(&self) -> i64 {
        inclusive_days(self.start, self.end)
    }
}

/// Wide-format snapshot of loaded assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentTable {
    pub assignments: Vec<Assignment>,
}

impl AssignmentTable {
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Explode into long format, keeping row order then resource order.
    pub fn to_long(&self) -> ResourceTable {
        let rows = self
            .assignments
            .iter()
            .enumerate()
            .flat_map(|(index, assignment)| assignment.explode(index))
            .collect();
        ResourceTable { rows }
    }
}

/// Long-format snapshot, one row per (assignment, resource).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceTable {
    pub rows: Vec<ResourceRow>,
}

impl ResourceTable {
    pub fn new(rows: Vec<ResourceRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Earliest start and latest end across all rows.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.rows.iter().map(|row| row.start).min()?;
        let end = self.rows.iter().map(|row| row.end).max()?;
        Some((start, end))
    }

    /// Window spanning the whole table, used when the caller picks no dates.
    pub fn default_window(&self) -> Option<DateWindow> {
        let (start, end) = self.date_range()?;
        DateWindow::new(start, end).ok()
    }
}
