//! mandala: prints how the Light experiences states of being
//!
//! With no arguments, renders the four reference experiences. States can also
//! come from a TOML config file or from `--state` JSON arguments.

mod config;
mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mandala::{Source, StateOfBeing, MANDALAS, SHADOW_MANDALA};
use tracing::{debug, info};

use config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "mandala")]
#[command(about = "Prints how the Light experiences states of being")]
struct Cli {
    /// Path to a TOML file listing states to experience
    #[arg(short, long, env = "MANDALA_CONFIG")]
    config: Option<PathBuf>,

    /// JSON-encoded state of being (repeatable; overrides the config file)
    #[arg(short, long = "state", value_name = "JSON")]
    states: Vec<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the six mandalas
    Mandalas,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout only carries renderings
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mandala=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            info!("Config file: {}", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.format = format;
    }
    if !cli.states.is_empty() {
        config.states = cli
            .states
            .iter()
            .map(|raw| {
                StateOfBeing::from_json(raw).with_context(|| format!("Invalid --state {}", raw))
            })
            .collect::<anyhow::Result<_>>()?;
    }

    if let Some(Commands::Mandalas) = cli.command {
        for mandala in MANDALAS.iter().chain(std::iter::once(&SHADOW_MANDALA)) {
            println!("{}", output::render_mandala(mandala, config.format)?);
        }
        return Ok(());
    }

    let states = config.states();
    debug!(count = states.len(), format = ?config.format, "Rendering experiences");

    let light = Source::flash();
    for state in states {
        let experience = light.through(state);
        println!("{}", output::render_experience(&experience, config.format)?);
    }

    Ok(())
}
