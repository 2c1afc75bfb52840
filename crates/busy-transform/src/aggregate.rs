//! Per-resource busy-day aggregation.

use std::collections::{BTreeMap, HashSet};

use busy_model::{ProjectBusy, ResourceRow};
use tracing::debug;

/// Distinct resource names in order of first appearance.
pub fn distinct_resources(rows: &[ResourceRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for row in rows {
        if seen.insert(row.resource.as_str()) {
            distinct.push(row.resource.clone());
        }
    }
    distinct
}

/// Rows assigned to exactly `resource`.
pub fn rows_for_resource(rows: &[ResourceRow], resource: &str) -> Vec<ResourceRow> {
    rows.iter()
        .filter(|row| row.resource == resource)
        .cloned()
        .collect()
}

/// Group rows by project, summing inclusive durations.
///
/// Each project's span runs from its earliest start to its latest end.
/// Overlapping rows are summed, not merged. The result is ordered by project
/// name.
pub fn busy_days_per_project(rows: &[ResourceRow]) -> Vec<ProjectBusy> {
    let mut grouped: BTreeMap<&str, ProjectBusy> = BTreeMap::new();
    for row in rows {
        grouped
            .entry(row.project.as_str())
            .and_modify(|busy| {
                busy.busy_days += row.duration_days();
                busy.start = busy.start.min(row.start);
                busy.end = busy.end.max(row.end);
            })
            .or_insert_with(|| ProjectBusy {
                project: row.project.clone(),
                busy_days: row.duration_days(),
                start: row.start,
                end: row.end,
            });
    }
    debug!(rows = rows.len(), projects = grouped.len(), "aggregated busy days");
    grouped.into_values().collect()
}

/// Total busy days across all projects.
pub fn total_busy_days(busy: &[ProjectBusy]) -> i64 {
    busy.iter().map(|entry| entry.busy_days).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn row(project: &str, resource: &str, start: NaiveDate, end: NaiveDate) -> ResourceRow {
        ResourceRow {
            assignment: 0,
            project: project.to_string(),
            start,
            end,
            resource: resource.to_string(),
        }
    }

    #[test]
    fn distinct_keeps_first_appearance() {
        let rows = vec![
            row("HBL", "Zain", date(1, 1), date(1, 2)),
            row("HBL", "Ali", date(1, 1), date(1, 2)),
            row("MCB", "Zain", date(2, 1), date(2, 2)),
        ];
        assert_eq!(distinct_resources(&rows), vec!["Zain", "Ali"]);
    }

    #[test]
    fn resource_match_is_exact() {
        let rows = vec![
            row("HBL", "Ali", date(1, 1), date(1, 2)),
            row("HBL", "Alia", date(1, 1), date(1, 2)),
            row("HBL", "ali", date(1, 1), date(1, 2)),
        ];
        assert_eq!(rows_for_resource(&rows, "Ali").len(), 1);
        assert!(rows_for_resource(&rows, "Nobody").is_empty());
    }

    #[test]
    fn sums_durations_and_spans_per_project() {
        let rows = vec![
            row("MCB", "Ali", date(3, 12), date(3, 15)),
            row("HBL", "Ali", date(1, 1), date(1, 10)),
            row("MCB", "Ali", date(3, 20), date(3, 21)),
        ];
        let busy = busy_days_per_project(&rows);
        assert_eq!(
            busy,
            vec![
                ProjectBusy {
                    project: "HBL".into(),
                    busy_days: 10,
                    start: date(1, 1),
                    end: date(1, 10),
                },
                ProjectBusy {
                    project: "MCB".into(),
                    busy_days: 6,
                    start: date(3, 12),
                    end: date(3, 21),
                },
            ]
        );
        assert_eq!(total_busy_days(&busy), 16);
    }

    #[test]
    fn overlapping_rows_are_double_counted() {
        let rows = vec![
            row("HBL", "Ali", date(4, 1), date(4, 5)),
            row("HBL", "Ali", date(4, 3), date(4, 7)),
        ];
        let busy = busy_days_per_project(&rows);
        assert_eq!(busy[0].busy_days, 10);
        assert_eq!((busy[0].start, busy[0].end), (date(4, 1), date(4, 7)));
    }

    #[test]
    fn empty_rows_aggregate_to_nothing() {
        assert!(busy_days_per_project(&[]).is_empty());
    }
}
