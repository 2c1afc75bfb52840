//! Command implementations shared by the binary and the integration tests.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use busy_generate::{GeneratorConfig, generate_to_file};
use busy_ingest::load_resource_table;
use busy_model::{AssignmentTable, DateWindow};
use busy_report::{
    Dashboard, DashboardRequest, ReportError, build_dashboard, resource_options,
    write_dashboard_json,
};
use tracing::{info, info_span};

/// Generate the sample file at `output`.
pub fn run_generate(output: &Path, config: &GeneratorConfig) -> Result<AssignmentTable> {
    let span = info_span!("generate", output = %output.display());
    let _guard = span.enter();
    let table = generate_to_file(output, config)
        .with_context(|| format!("generate {}", output.display()))?;
    Ok(table)
}

/// Load the file, recompute the dashboard and optionally export it.
///
/// An invalid window surfaces as a [`ReportError`] that
/// [`validation_message`] recognises.
pub fn run_dashboard(
    input: &Path,
    request: &DashboardRequest,
    json: Option<&Path>,
) -> Result<Dashboard> {
    let started = Instant::now();
    let table = load_resource_table(input).context("load assignments")?;
    let dashboard = build_dashboard(&table, request)?;
    if let Some(path) = json {
        write_dashboard_json(path, &dashboard)
            .with_context(|| format!("export dashboard to {}", path.display()))?;
    }
    info!(
        input = %input.display(),
        duration_ms = started.elapsed().as_millis(),
        "dashboard complete"
    );
    Ok(dashboard)
}

/// Resource selection options for the request's window.
pub fn run_resources(
    input: &Path,
    request: &DashboardRequest,
) -> Result<(DateWindow, Vec<String>)> {
    let table = load_resource_table(input).context("load assignments")?;
    Ok(resource_options(&table, request)?)
}

/// Exit status for a process whose command failed unexpectedly.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for a rejected date window.
pub const EXIT_VALIDATION: i32 = 2;

/// Process exit status for a command outcome.
pub fn exit_code<T>(outcome: &Result<T>) -> i32 {
    match outcome {
        Ok(_) => 0,
        Err(error) if validation_message(error).is_some() => EXIT_VALIDATION,
        Err(_) => EXIT_FAILURE,
    }
}

/// User-facing message when `error` is a window validation failure.
pub fn validation_message(error: &anyhow::Error) -> Option<String> {
    error
        .downcast_ref::<ReportError>()
        .filter(|report| report.is_validation())
        .map(ToString::to_string)
}
