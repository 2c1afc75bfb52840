pub mod assignment;
pub mod busy;
pub mod error;
pub mod window;

pub use assignment::{
    Assignment, AssignmentTable, RESOURCE_SEPARATOR, ResourceRow, ResourceTable, split_resources,
};
pub use busy::{CalendarEntry, HeatmapMatrix, ProjectBusy};
pub use error::{ModelError, Result};
pub use window::{DateWindow, inclusive_days};

/// Date format used for display and serialization.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
