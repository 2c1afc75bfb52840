//! Chart-ready dashboard views over the long-format assignment table.

pub mod charts;
pub mod dashboard;
pub mod error;
pub mod export;

pub use charts::{BarEntry, GanttBar, PieSlice, bar_chart, gantt_chart, hover_text, pie_chart};
pub use dashboard::{
    Dashboard, DashboardRequest, ResourceView, build_dashboard, resolve_window, resource_options,
};
pub use error::{ReportError, Result};
pub use export::{dashboard_json, write_dashboard_json};
