//! Daily calendar expansion and the date x project heatmap pivot.

use std::collections::{BTreeMap, BTreeSet};

use busy_model::{CalendarEntry, DATE_FORMAT, HeatmapMatrix, ResourceRow};
use chrono::NaiveDate;
use tracing::debug;

/// One entry per calendar day of every row, inclusive of both ends.
pub fn expand_calendar(rows: &[ResourceRow]) -> Vec<CalendarEntry> {
    rows.iter()
        .flat_map(|row| {
            row.start
                .iter_days()
                .take_while(move |date| *date <= row.end)
                .map(move |date| CalendarEntry {
                    date,
                    project: row.project.clone(),
                    count: 1,
                })
        })
        .collect()
}

/// Pivot calendar entries into a dense matrix.
///
/// Rows are the distinct dates in ascending order, columns the distinct
/// projects in ascending order. Missing cells are 0.
pub fn pivot_heatmap(entries: &[CalendarEntry]) -> HeatmapMatrix {
    let projects: BTreeSet<&str> = entries.iter().map(|entry| entry.project.as_str()).collect();
    let columns: BTreeMap<&str, usize> = projects
        .iter()
        .enumerate()
        .map(|(index, project)| (*project, index))
        .collect();
    let mut by_date: BTreeMap<NaiveDate, Vec<u32>> = BTreeMap::new();
    for entry in entries {
        let row = by_date
            .entry(entry.date)
            .or_insert_with(|| vec![0; columns.len()]);
        if let Some(&column) = columns.get(entry.project.as_str()) {
            row[column] += entry.count;
        }
    }
    debug!(
        dates = by_date.len(),
        projects = columns.len(),
        "pivoted calendar heatmap"
    );
    HeatmapMatrix {
        dates: by_date
            .keys()
            .map(|date| date.format(DATE_FORMAT).to_string())
            .collect(),
        projects: projects.into_iter().map(ToString::to_string).collect(),
        cells: by_date.into_values().collect(),
    }
}

/// Expand and pivot in one step.
pub fn heatmap_for_rows(rows: &[ResourceRow]) -> HeatmapMatrix {
    pivot_heatmap(&expand_calendar(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn row(project: &str, start: NaiveDate, end: NaiveDate) -> ResourceRow {
        ResourceRow {
            assignment: 0,
            project: project.to_string(),
            start,
            end,
            resource: "Hira".to_string(),
        }
    }

    #[test]
    fn expands_inclusive_days() {
        let entries = expand_calendar(&[row("HBL", date(2, 27), date(3, 1))]);
        let dates: Vec<NaiveDate> = entries.iter().map(|entry| entry.date).collect();
        assert_eq!(dates, vec![date(2, 27), date(2, 28), date(2, 29), date(3, 1)]);
        assert!(entries.iter().all(|entry| entry.count == 1));
    }

    #[test]
    fn pivot_fills_missing_cells_with_zero() {
        let matrix = heatmap_for_rows(&[
            row("UBL", date(6, 2), date(6, 3)),
            row("HBL", date(6, 1), date(6, 2)),
        ]);
        assert_eq!(matrix.dates, vec!["2024-06-01", "2024-06-02", "2024-06-03"]);
        assert_eq!(matrix.projects, vec!["HBL", "UBL"]);
        assert_eq!(matrix.cells, vec![vec![1, 0], vec![1, 1], vec![0, 1]]);
    }

    #[test]
    fn duplicate_rows_sum_in_a_cell() {
        let matrix = heatmap_for_rows(&[
            row("HBL", date(6, 1), date(6, 1)),
            row("HBL", date(6, 1), date(6, 1)),
        ]);
        assert_eq!(matrix.get("2024-06-01", "HBL"), Some(2));
    }

    #[test]
    fn empty_rows_give_empty_matrix() {
        assert!(heatmap_for_rows(&[]).is_empty());
    }
}
