//! Routing manipulator CLI
//!
//! Adds a bundle's routing import to a YAML, XML or PHP routing file.

mod cli;
mod error;

use clap::Parser;
use colored::Colorize;
use routing_edit::{AddOutcome, ManipulatorConfig, RoutingFormat, RoutingManipulator};
use routing_fs::NormalizedPath;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        // Only fails if a subscriber is already installed
        let _ = tracing::subscriber::set_global_default(subscriber);
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Add {
            file,
            bundle,
            format,
            prefix,
            resource,
            config,
        } => cmd_add(
            &file,
            &bundle,
            &format,
            prefix.as_deref(),
            resource.as_deref(),
            config.as_deref(),
        ),
    }
}

fn cmd_add(
    file: &str,
    bundle: &str,
    format: &str,
    prefix: Option<&str>,
    resource: Option<&str>,
    config: Option<&str>,
) -> Result<()> {
    let config = match config {
        Some(path) => ManipulatorConfig::load(&NormalizedPath::new(path))?,
        None => ManipulatorConfig::default(),
    };
    let prefix = prefix.unwrap_or(&config.default_prefix).to_string();
    let resource = resource.unwrap_or(&config.default_resource).to_string();
    let format = RoutingFormat::from_name(format);

    let manipulator = RoutingManipulator::new(file).with_config(config);

    match manipulator.add_resource(bundle, format, &prefix, &resource)? {
        AddOutcome::Written => {
            println!(
                "{} Imported {} into {}",
                "OK".green().bold(),
                bundle.cyan(),
                file
            );
            Ok(())
        }
        AddOutcome::Skipped => {
            println!(
                "{} {} routing is not file based, {} left unchanged",
                "note".yellow().bold(),
                format,
                file
            );
            Ok(())
        }
        AddOutcome::WriteFailed { source } => Err(CliError::WriteFailed {
            path: file.to_string(),
            source,
        }),
    }
}
