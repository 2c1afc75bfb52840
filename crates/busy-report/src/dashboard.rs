//! The dashboard snapshot: every table and chart for one interaction.

use busy_model::{DateWindow, HeatmapMatrix, ProjectBusy, ResourceRow, ResourceTable};
use busy_transform::{
    busy_days_per_project, distinct_resources, filter_window, heatmap_for_rows,
    rows_for_resource, total_busy_days,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::charts::{BarEntry, GanttBar, PieSlice, bar_chart, gantt_chart, pie_chart};
use crate::error::{ReportError, Result};

/// User inputs for one dashboard render. `None` picks the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardRequest {
    /// Window start; defaults to the earliest start in the data.
    pub start: Option<NaiveDate>,
    /// Window end; defaults to the latest end in the data.
    pub end: Option<NaiveDate>,
    /// Selected resource; defaults to the first one in the window.
    pub resource: Option<String>,
}

/// Per-resource views of a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceView {
    pub resource: String,
    /// Filtered rows for this resource (the Gantt source).
    pub rows: Vec<ResourceRow>,
    pub busy: Vec<ProjectBusy>,
    pub total_busy_days: i64,
    pub pie: Vec<PieSlice>,
    pub bar: Vec<BarEntry>,
    pub gantt: Vec<GanttBar>,
    pub heatmap: HeatmapMatrix,
}

impl ResourceView {
    fn build(filtered: &[ResourceRow], resource: &str) -> Self {
        let rows = rows_for_resource(filtered, resource);
        if rows.is_empty() {
            warn!(resource, "selected resource has no rows in window");
        }
        let busy = busy_days_per_project(&rows);
        Self {
            resource: resource.to_string(),
            total_busy_days: total_busy_days(&busy),
            pie: pie_chart(&busy),
            bar: bar_chart(&busy),
            gantt: gantt_chart(&rows),
            heatmap: heatmap_for_rows(&rows),
            busy,
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub window: DateWindow,
    /// Rows overlapping the window, clamped to it.
    pub filtered: Vec<ResourceRow>,
    /// Selection options, in first-appearance order.
    pub resources: Vec<String>,
    /// `None` when the window contains no rows at all.
    pub selection: Option<ResourceView>,
}

/// Resolve the request's dates against the table's range.
///
/// # Errors
///
/// [`ReportError::InvalidWindow`] when start falls after end,
/// [`ReportError::EmptyData`] when a date is missing and the table is empty.
pub fn resolve_window(table: &ResourceTable, request: &DashboardRequest) -> Result<DateWindow> {
    let range = table.date_range();
    let start = request
        .start
        .or(range.map(|(start, _)| start))
        .ok_or(ReportError::EmptyData)?;
    let end = request
        .end
        .or(range.map(|(_, end)| end))
        .ok_or(ReportError::EmptyData)?;
    Ok(DateWindow::new(start, end)?)
}

/// The resolved window and the selection options it yields.
pub fn resource_options(
    table: &ResourceTable,
    request: &DashboardRequest,
) -> Result<(DateWindow, Vec<String>)> {
    let window = resolve_window(table, request)?;
    let resources = distinct_resources(&filter_window(&table.rows, &window));
    Ok((window, resources))
}

/// Recompute every view from the snapshot.
///
/// A stale resource selection yields an empty view rather than an error.
pub fn build_dashboard(table: &ResourceTable, request: &DashboardRequest) -> Result<Dashboard> {
    let window = resolve_window(table, request)?;
    let span = info_span!("dashboard", start = %window.start(), end = %window.end());
    let _guard = span.enter();

    let filtered = filter_window(&table.rows, &window);
    let resources = distinct_resources(&filtered);
    let selected = request
        .resource
        .clone()
        .or_else(|| resources.first().cloned());
    debug!(options = resources.len(), selected = ?selected, "resolved resource selection");
    let selection = selected.map(|resource| ResourceView::build(&filtered, &resource));
    info!(
        rows = filtered.len(),
        resources = resources.len(),
        "built dashboard"
    );
    Ok(Dashboard {
        window,
        filtered,
        resources,
        selection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn table() -> ResourceTable {
        let row = |assignment, project: &str, start, end, resource: &str| ResourceRow {
            assignment,
            project: project.to_string(),
            start,
            end,
            resource: resource.to_string(),
        };
        ResourceTable::new(vec![
            row(0, "HBL", date(3, 10), date(3, 15), "Ali"),
            row(0, "HBL", date(3, 10), date(3, 15), "Sara"),
            row(1, "MCB", date(4, 1), date(4, 10), "Sara"),
        ])
    }

    #[test]
    fn defaults_span_the_data() {
        let window = resolve_window(&table(), &DashboardRequest::default()).unwrap();
        assert_eq!((window.start(), window.end()), (date(3, 10), date(4, 10)));
    }

    #[test]
    fn reversed_window_is_a_validation_error() {
        let request = DashboardRequest {
            start: Some(date(6, 1)),
            end: Some(date(5, 1)),
            resource: None,
        };
        let err = build_dashboard(&table(), &request).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn empty_table_without_dates_cannot_default() {
        let err = build_dashboard(&ResourceTable::default(), &DashboardRequest::default())
            .unwrap_err();
        assert!(matches!(err, ReportError::EmptyData));
        assert!(!err.is_validation());
    }

    #[test]
    fn first_resource_is_selected_by_default() {
        let dashboard = build_dashboard(&table(), &DashboardRequest::default()).unwrap();
        assert_eq!(dashboard.resources, vec!["Ali", "Sara"]);
        let view = dashboard.selection.expect("selection");
        assert_eq!(view.resource, "Ali");
        assert_eq!(view.total_busy_days, 6);
    }

    #[test]
    fn options_follow_the_window() {
        let request = DashboardRequest {
            start: Some(date(3, 20)),
            end: None,
            resource: None,
        };
        let (window, resources) = resource_options(&table(), &request).unwrap();
        assert_eq!((window.start(), window.end()), (date(3, 20), date(4, 10)));
        assert_eq!(resources, vec!["Sara"]);
    }

    #[test]
    fn stale_selection_gives_empty_views() {
        let request = DashboardRequest {
            start: Some(date(3, 20)),
            end: None,
            resource: Some("Ali".to_string()),
        };
        let view = build_dashboard(&table(), &request)
            .unwrap()
            .selection
            .expect("selection");
        assert!(view.rows.is_empty());
        assert!(view.busy.is_empty());
        assert!(view.pie.is_empty());
        assert!(view.gantt.is_empty());
        assert!(view.heatmap.is_empty());
        assert_eq!(view.total_busy_days, 0);
    }

    #[test]
    fn window_without_rows_has_no_selection() {
        let request = DashboardRequest {
            start: Some(date(8, 1)),
            end: Some(date(8, 31)),
            resource: None,
        };
        let dashboard = build_dashboard(&table(), &request).unwrap();
        assert!(dashboard.filtered.is_empty());
        assert!(dashboard.selection.is_none());
    }
}
