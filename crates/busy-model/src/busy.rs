use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Busy-day aggregate of one resource on one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBusy {
    pub project: String,
    pub busy_days: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One calendar day of a resource attributed to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub project: String,
    pub count: u32,
}

/// Date x project matrix of busy counts.
///
/// `cells[row][column]` holds the count for `dates[row]` and
/// `projects[column]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapMatrix {
    pub dates: Vec<String>,
    pub projects: Vec<String>,
    pub cells: Vec<Vec<u32>>,
}

impl HeatmapMatrix {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn get(&self, date: &str, project: &str) -> Option<u32> {
        let row = self.dates.iter().position(|value| value == date)?;
        let column = self.projects.iter().position(|value| value == project)?;
        self.cells.get(row)?.get(column).copied()
    }

    /// Sum of one project column.
    pub fn column_total(&self, project: &str) -> u32 {
        let Some(column) = self.projects.iter().position(|value| value == project) else {
            return 0;
        };
        self.cells
            .iter()
            .filter_map(|row| row.get(column))
            .sum()
    }
}
