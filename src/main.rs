// Event Pass Generator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/event-pass --role monitor --issue "Ana Lopez <ana@uni.edu>"
// ```
//
// Or interactively:
//
// ```console
// $ ./target/release/event-pass --interactive
// ```

use std::io;
use std::process;

use anyhow::Context;
use clap::Parser;
use event_pass_generator::session::{run_batch, Console, LoggingConfig};
use event_pass_generator::types::{CliArgs, PassConfig};
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match PassConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging = if args.debug {
        LoggingConfig::debug()
    } else if args.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::new()
    };

    // Held until exit so buffered file output is flushed
    let _log_guard = match logging.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Event Pass Generator");

    // Load configuration from CLI arguments and optional config file
    let interactive = args.interactive;
    let dry_run = args.dry_run;
    let config = match PassConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        eprintln!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no passes will be built.");
        print_configuration_summary(&config);
        return;
    }

    let result = if interactive { run_console(&config) } else { run_batch_output(&config) };

    if let Err(e) = result {
        error!("Run failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    info!("Event Pass Generator completed successfully");
}

/// Drive the command console from stdin
fn run_console(config: &PassConfig) -> anyhow::Result<()> {
    let mut console = Console::from_config(config).context("Invalid console configuration")?;
    let stdin = io::stdin();
    console.run(stdin.lock(), io::stdout().lock()).context("Console I/O failed")?;
    Ok(())
}

/// Build the configured template, issue the configured passes, print the result
fn run_batch_output(config: &PassConfig) -> anyhow::Result<()> {
    let format = config.get_output_format()?;
    let run = run_batch(config)?;
    println!("{}", run.render(format).context("Failed to render batch output")?);
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &PassConfig) {
    eprintln!("Configuration:");
    eprintln!("  Role: {}", config.role);
    eprintln!("  Event: {}", config.event_name);
    eprintln!("  Date: {}", config.event_date);
    eprintln!("  Venue: {}", config.venue);
    eprintln!("  Holders: {}", config.holders.len());
    for holder in &config.holders {
        eprintln!("    - {}", holder);
    }
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
