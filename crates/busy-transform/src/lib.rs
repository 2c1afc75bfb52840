//! Pure transforms from the long-format table to busy-day aggregates.

pub mod aggregate;
pub mod calendar;
pub mod window;

pub use aggregate::{busy_days_per_project, distinct_resources, rows_for_resource, total_busy_days};
pub use calendar::{expand_calendar, heatmap_for_rows, pivot_heatmap};
pub use window::filter_window;
