//! Observability configuration checker.
//!
//! Loads a service's observability config the same way the service does at
//! startup (TOML over defaults, `OBSERVABILITY_*` overrides, validation) and
//! reports the outcome.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use observability_config::config::fields::FIELDS;
use observability_config::config::{default_config, load_config};
use observability_config::observability::logging::init_logging_to;

#[derive(Parser)]
#[command(name = "observability-config")]
#[command(about = "Validate and inspect observability configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load, override and validate a config file
    Check {
        /// Path to the TOML config file
        path: PathBuf,

        /// Print the resolved config as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default config as TOML
    Defaults,
    /// List config fields and their environment override keys
    EnvKeys,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Check { path, json } => {
            // Log with defaults until the file is known good. Stdout is
            // reserved for the report.
            init_logging_to(&default_config(), std::io::stderr)?;

            let config = load_config(&path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("service_name:    {}", config.service_name);
                println!("environment:     {}", config.environment);
                println!("logging level:   {}", config.effective_logging_level());
                println!("production:      {}", config.is_production());
                println!("health checks:   {}", config.health_checks.checks.join(", "));
            }
        }
        Commands::Defaults => {
            print!("{}", toml::to_string_pretty(&default_config())?);
        }
        Commands::EnvKeys => {
            for spec in FIELDS {
                println!("{:<42} {}", spec.path, spec.env_key);
            }
        }
    }
    Ok(())
}
