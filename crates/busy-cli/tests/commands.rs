//! Integration tests for the CLI command layer.

use busy_cli::commands::{
    EXIT_FAILURE, EXIT_VALIDATION, exit_code, run_dashboard, run_generate, run_resources,
    validation_message,
};
use busy_generate::GeneratorConfig;
use busy_report::DashboardRequest;
use chrono::NaiveDate;
use tempfile::TempDir;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

#[test]
fn generate_then_dashboard_over_full_range() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("output.csv");
    let config = GeneratorConfig::default().with_seed(Some(11));
    let generated = run_generate(&input, &config).expect("generate");
    assert_eq!(generated.len(), 20);

    let dashboard = run_dashboard(&input, &DashboardRequest::default(), None).expect("dashboard");

    // The default window spans the data, so nothing is dropped or clamped.
    assert_eq!(dashboard.filtered.len(), 80);
    let view = dashboard.selection.expect("selection");
    assert_eq!(Some(&view.resource), dashboard.resources.first());
    let expected: i64 = dashboard
        .filtered
        .iter()
        .filter(|row| row.resource == view.resource)
        .map(|row| row.duration_days())
        .sum();
    assert_eq!(view.total_busy_days, expected);
}

#[test]
fn reversed_window_is_reported_as_validation() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("output.csv");
    run_generate(&input, &GeneratorConfig::default().with_seed(Some(3))).expect("generate");

    let request = DashboardRequest {
        start: Some(date(6, 1)),
        end: Some(date(5, 1)),
        resource: None,
    };
    let json = dir.path().join("dashboard.json");
    let outcome = run_dashboard(&input, &request, Some(json.as_path()));
    assert_eq!(exit_code(&outcome), EXIT_VALIDATION);
    assert_eq!(exit_code(&run_resources(&input, &request)), EXIT_VALIDATION);
    let err = outcome.unwrap_err();

    let message = validation_message(&err).expect("validation error");
    assert!(message.starts_with("End date must be after start date."));
    assert!(!json.exists());
}

#[test]
fn missing_input_is_fatal_not_validation() {
    let dir = TempDir::new().expect("temp dir");
    let outcome = run_dashboard(
        &dir.path().join("absent.csv"),
        &DashboardRequest::default(),
        None,
    );
    assert_eq!(exit_code(&outcome), EXIT_FAILURE);
    let err = outcome.unwrap_err();
    assert!(validation_message(&err).is_none());
    assert!(format!("{err:#}").contains("CSV file not found"));
}

#[test]
fn json_export_and_resource_listing() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("output.csv");
    run_generate(&input, &GeneratorConfig::default().with_seed(Some(5))).expect("generate");
    let json = dir.path().join("dashboard.json");

    let request = DashboardRequest::default();
    let outcome = run_dashboard(&input, &request, Some(json.as_path()));
    assert_eq!(exit_code(&outcome), 0);
    let dashboard = outcome.expect("dashboard");
    assert!(json.exists());

    let (window, resources) = run_resources(&input, &request).expect("list");
    assert_eq!(window, dashboard.window);
    assert_eq!(resources, dashboard.resources);
}

#[test]
fn invalid_generator_settings_fail_early() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("output.csv");
    let config = GeneratorConfig {
        records: 50,
        ..GeneratorConfig::default()
    };
    let err = run_generate(&input, &config).unwrap_err();
    assert!(format!("{err:#}").contains("cannot generate 50 records"));
    assert!(!input.exists());
}
