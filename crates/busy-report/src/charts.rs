//! Chart series derived from the per-project busy table.

use std::collections::HashMap;

use busy_model::{DATE_FORMAT, ProjectBusy, ResourceRow};
use chrono::NaiveDate;
use serde::Serialize;

/// Pie slice: a project's share of the resource's busy days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub project: String,
    pub busy_days: i64,
    /// Percentage of all busy days, `0.0..=100.0`.
    pub share: f64,
    pub hover_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarEntry {
    pub project: String,
    pub busy_days: i64,
}

/// Timeline bar for one clamped assignment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GanttBar {
    pub project: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Hover label listing project, busy days and span.
pub fn hover_text(busy: &ProjectBusy) -> String {
    format!(
        "Project: {}\nBusy Days: {}\nStart Date: {}\nEnd Date: {}",
        busy.project,
        busy.busy_days,
        busy.start.format(DATE_FORMAT),
        busy.end.format(DATE_FORMAT)
    )
}

pub fn pie_chart(busy: &[ProjectBusy]) -> Vec<PieSlice> {
    let total: i64 = busy.iter().map(|entry| entry.busy_days).sum();
    if total <= 0 {
        return Vec::new();
    }
    busy.iter()
        .map(|entry| PieSlice {
            project: entry.project.clone(),
            busy_days: entry.busy_days,
            share: entry.busy_days as f64 * 100.0 / total as f64,
            hover_text: hover_text(entry),
        })
        .collect()
}

pub fn bar_chart(busy: &[ProjectBusy]) -> Vec<BarEntry> {
    busy.iter()
        .map(|entry| BarEntry {
            project: entry.project.clone(),
            busy_days: entry.busy_days,
        })
        .collect()
}

/// One bar per row, projects ordered by total busy days ascending.
///
/// Ties fall back to project name; bars of one project are ordered by start.
pub fn gantt_chart(rows: &[ResourceRow]) -> Vec<GanttBar> {
    let mut totals: HashMap<&str, i64> = HashMap::new();
    for row in rows {
        *totals.entry(row.project.as_str()).or_default() += row.duration_days();
    }
    let mut bars: Vec<GanttBar> = rows
        .iter()
        .map(|row| GanttBar {
            project: row.project.clone(),
            start: row.start,
            end: row.end,
        })
        .collect();
    bars.sort_by(|a, b| {
        let total = |project: &str| totals.get(project).copied().unwrap_or_default();
        total(&a.project)
            .cmp(&total(&b.project))
            .then_with(|| a.project.cmp(&b.project))
            .then_with(|| a.start.cmp(&b.start))
    });
    bars
}
