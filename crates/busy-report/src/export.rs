//! JSON export of the dashboard snapshot.

use std::path::Path;

use tracing::info;

use crate::dashboard::Dashboard;
use crate::error::{ReportError, Result};

pub fn dashboard_json(dashboard: &Dashboard) -> Result<String> {
    Ok(serde_json::to_string_pretty(dashboard)?)
}

/// Write the dashboard as pretty-printed JSON.
pub fn write_dashboard_json(path: &Path, dashboard: &Dashboard) -> Result<()> {
    let json = dashboard_json(dashboard)?;
    std::fs::write(path, json).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote dashboard json");
    Ok(())
}
