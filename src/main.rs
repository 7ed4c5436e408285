use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;

mod cli;
mod console;

use cli::{Cli, Commands};
use console::{ConsoleExit, ConsoleOptions};
use weekplan::catalog::{self, Catalog};
use weekplan::config::Config;
use weekplan::export::{render_catalog, save_report};
use weekplan::session::Session;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("weekplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("weekplan.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn load_catalog(cli: &Cli, config: &Config) -> Result<Catalog> {
    let tasks_dir = cli.tasks_dir.clone().unwrap_or_else(|| config.resolved_tasks_dir());
    if cli.is_verbose() {
        println!("Loading CSV files from directory: {}", tasks_dir.display());
    }
    let catalog = catalog::load_dir(&tasks_dir, config.priorities())
        .with_context(|| format!("Failed to load catalog from {}", tasks_dir.display()))?;
    if cli.is_verbose() {
        println!("Total lines loaded: {}", catalog.len());
    }
    Ok(catalog)
}

fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    match &cli.command {
        None => run_plan(cli, config, false),
        Some(Commands::Tags) => run_plan(cli, config, true),
        Some(Commands::Catalog) => handle_catalog_command(cli, config),
    }
}

fn run_plan(cli: &Cli, config: &Config, tags_only: bool) -> Result<()> {
    let start_date = cli.start_date().context("Invalid --start-date")?;
    let output = cli.output_path(start_date);

    if cli.is_verbose() {
        println!("{}", "Generating a week suggestion...".cyan());
        println!("Start date: {}", weekplan::domain::format_date(start_date));
        if !tags_only {
            println!("Output file: {}", output.display());
        }
    }

    let catalog = if tags_only { Catalog::default() } else { load_catalog(cli, config)? };
    let mut session = Session::new(config.priorities().clone(), catalog, start_date, new_rng(cli.seed));
    if tags_only {
        session = session.tags_only();
    }

    let options = ConsoleOptions {
        clear: cli.clr,
        verbose: cli.is_verbose(),
    };
    let exit = console::run(&mut session, options)?;

    if exit == ConsoleExit::Export
        && !tags_only
        && let Some(week) = session.week()
    {
        save_report(week, &output).with_context(|| format!("Failed to write {}", output.display()))?;
        println!("{} {}", "Week plan saved to".green(), output.display());
    }
    Ok(())
}

fn handle_catalog_command(cli: &Cli, config: &Config) -> Result<()> {
    info!("Listing catalog");
    let catalog = load_catalog(cli, config)?;
    print!("{}", render_catalog(&catalog));
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.cfg.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", config.source);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
