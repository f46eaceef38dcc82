mod cli;

use anyhow::Context;
use cli::Args;
use pkg_depgraph::adapters::outbound::console::StderrProgressReporter;
use pkg_depgraph::adapters::outbound::pkg::PkgQuerySource;
use pkg_depgraph::application::dto::GraphRequest;
use pkg_depgraph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pkg_depgraph::application::use_cases::BuildGraphUseCase;
use pkg_depgraph::config::{self, ConfigFile, Settings};
use pkg_depgraph::ports::outbound::ProgressReporter;
use pkg_depgraph::shared::error::ExitCode;
use pkg_depgraph::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(args.overrides(), config.as_ref())?;

    // Environment precondition: checked once, before any query runs
    let package_source = PkgQuerySource::new(settings.pkg_path.clone());
    package_source.validate()?;

    let progress_reporter = StderrProgressReporter::new(settings.verbose);

    // Create use case with injected dependencies
    let use_case = BuildGraphUseCase::new(package_source, &progress_reporter);
    let response = use_case.execute(GraphRequest::new(settings.normalize))?;

    progress_reporter.report(FormatterFactory::progress_message(settings.mode));
    let formatter = FormatterFactory::create(settings.mode);
    let rendered = formatter.format(&response.relation)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output.clone()));
    presenter.present(&rendered)?;

    if let Some(path) = &settings.output {
        progress_reporter.report(&format!("✅ Output complete: {}", path.display()));
    }

    Ok(())
}

/// Explicit `--config` must exist; otherwise look for the default file in the working directory
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    if let Some(path) = explicit {
        return config::load_config_from_path(path).map(Some);
    }

    let current_dir = std::env::current_dir().context("Failed to determine current directory")?;
    config::discover_config(&current_dir)
}
