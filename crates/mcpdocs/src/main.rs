//! mcpdocs CLI - component documentation API and Figma-to-code mapper.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use mcpdocs_catalog::Framework;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "mcpdocs")]
#[command(about = "Component documentation API and Figma-to-code mapper")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to mcpdocs.toml config file
    #[arg(short, long, default_value = "mcpdocs.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config and a sample vue component listing
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Start the JSON API server
    Serve {
        /// Port to listen on (defaults to config or 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to config or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
    },

    /// Print the merged component listing, or one component with its mapping
    Components {
        /// Component name in any casing
        name: Option<String>,
    },

    /// Map a Figma JSON payload to component code
    Map {
        /// JSON file holding the Figma data
        file: PathBuf,

        /// Framework to generate code for
        #[arg(short, long, value_enum, default_value = "rails")]
        target: Target,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Rails,
    Vue,
}

impl From<Target> for Framework {
    fn from(target: Target) -> Self {
        match target {
            Target::Rails => Framework::Rails,
            Target::Vue => Framework::Vue,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so JSON on stdout stays pipeable
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Serve { port, host } => {
            commands::serve::run(&cli.config, port, host).await?;
        }
        Commands::Components { name } => {
            commands::components::run(&cli.config, name.as_deref())?;
        }
        Commands::Map { file, target } => {
            commands::map::run(&cli.config, &file, target.into())?;
        }
    }

    Ok(())
}
