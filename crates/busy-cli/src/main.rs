//! Resource Management Dashboard CLI.

use std::io::{self, IsTerminal};

use busy_cli::commands::{
    EXIT_FAILURE, exit_code, run_dashboard, run_generate, run_resources, validation_message,
};
use busy_cli::logging::{LogConfig, LogFormat, init_logging};
use busy_generate::GeneratorConfig;
use busy_report::DashboardRequest;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, GenerateArgs, LogFormatArg, LogLevelArg, WindowArgs};
use crate::summary::{print_dashboard, print_generated, print_resources};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_FAILURE);
    }
    let outcome = match &cli.command {
        Command::Generate(args) => {
            let config = generator_config(args);
            run_generate(&args.output, &config).map(|table| print_generated(&table, &args.output))
        }
        Command::Dashboard(args) => {
            let request = DashboardRequest {
                resource: args.resource.clone(),
                ..window_request(&args.window)
            };
            run_dashboard(&args.window.input, &request, args.json.as_deref())
                .map(|dashboard| print_dashboard(&dashboard, !args.no_heatmap))
        }
        Command::Resources(args) => run_resources(&args.input, &window_request(args))
            .map(|(window, resources)| print_resources(&window, &resources)),
    };
    if let Err(error) = &outcome {
        match validation_message(error) {
            Some(message) => eprintln!("{message}"),
            None => eprintln!("error: {error:#}"),
        }
    }
    std::process::exit(exit_code(&outcome));
}

fn generator_config(args: &GenerateArgs) -> GeneratorConfig {
    GeneratorConfig {
        records: args.count,
        resources_per_record: args.resources_per_project,
        min_offset_days: args.min_offset,
        max_offset_days: args.max_offset,
        year: args.year,
        seed: args.seed,
        ..GeneratorConfig::default()
    }
}

fn window_request(args: &WindowArgs) -> DashboardRequest {
    DashboardRequest {
        start: args.start,
        end: args.end,
        resource: None,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
