use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ocpi_locations::config::Settings;
use ocpi_locations::domain::{Emi3Id, IdentifierGenerator, ObjectIdSource};
use ocpi_locations::infrastructure::{log_messages, telemetry};
use serde_json::json;
use std::path::PathBuf;
use tracing::{info, instrument};

#[derive(Debug, Parser)]
#[command(
    name = "ocpi-ids",
    version,
    about = "Generate and inspect eMI3 compliant identifiers"
)]
struct Cli {
    /// Configuration file to load instead of the config/ directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print eMI3 compliant identifiers
    Generate {
        /// Falls back to identifier.country_code from the configuration
        #[arg(long)]
        country_code: Option<String>,
        /// Falls back to identifier.party_id from the configuration
        #[arg(long)]
        party_id: Option<String>,
        /// Falls back to identifier.type_id from the configuration
        #[arg(long)]
        type_id: Option<String>,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Print bare unique identifiers
    Unique {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Parse an eMI3 compliant identifier and print its parts as JSON
    Inspect { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::new(),
    }
    .context("Failed to load configuration")?;

    telemetry::init(&settings.logging);
    info!("{}", log_messages::cli::STARTING);

    run(cli.command, &settings)
}

#[instrument(skip(settings))]
fn run(command: Command, settings: &Settings) -> Result<()> {
    let generator = IdentifierGenerator::process_wide();

    match command {
        Command::Generate {
            country_code,
            party_id,
            type_id,
            count,
        } => {
            let defaults = &settings.identifier;
            // Missing segments fall through as empty strings so the generator reports them
            let country_code = country_code
                .or_else(|| defaults.country_code.clone())
                .unwrap_or_default();
            let party_id = party_id
                .or_else(|| defaults.party_id.clone())
                .unwrap_or_default();
            let type_id = type_id.or_else(|| defaults.type_id.clone());

            for _ in 0..count {
                let id = generator.generate_compliant_identifier(
                    &country_code,
                    &party_id,
                    type_id.as_deref(),
                )?;
                println!("{id}");
            }
        }
        Command::Unique { count } => {
            for _ in 0..count {
                println!("{}", generator.generate_unique_identifier());
            }
        }
        Command::Inspect { id } => {
            let parsed: Emi3Id = id
                .parse()
                .with_context(|| format!("'{id}' is not an eMI3 compliant identifier"))?;
            info!(id = %parsed, "{}", log_messages::cli::INSPECTED);

            let parts = json!({
                "country_code": parsed.country_code(),
                "party_id": parsed.party_id(),
                "type_id": parsed.type_id(),
                "suffix": parsed.suffix(),
                "embedded_timestamp": ObjectIdSource::timestamp_of(parsed.suffix()),
            });
            println!("{}", serde_json::to_string_pretty(&parts)?);
        }
    }

    Ok(())
}
