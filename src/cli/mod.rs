pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::cli::client::ApiClient;
use crate::cli::commands::resource::{Resource, ResourceCommands};

const DEFAULT_SERVER: &str = "http://localhost:3000";

#[derive(Parser)]
#[command(name = "biowatch")]
#[command(about = "Biodiversity Watch CLI - command-line client for the Biodiversity Watch API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, help = "API base URL (default: $BIOWATCH_API_URL or http://localhost:3000)")]
    pub server: Option<String>,

    #[arg(long, global = true, help = "Access token sent as Authorization (default: $BIOWATCH_TOKEN)")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Admin accounts")]
    Admins {
        #[command(subcommand)]
        cmd: ResourceCommands,
    },

    #[command(about = "User profiles")]
    Profiles {
        #[command(subcommand)]
        cmd: ResourceCommands,
    },

    #[command(about = "Species catalogue")]
    Species {
        #[command(subcommand)]
        cmd: ResourceCommands,
    },

    #[command(about = "Field observations")]
    Observations {
        #[command(subcommand)]
        cmd: ResourceCommands,
    },

    #[command(about = "API server status")]
    Server {
        #[command(subcommand)]
        cmd: commands::server::ServerCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    let server = cli
        .server
        .clone()
        .or_else(|| std::env::var("BIOWATCH_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    let token = cli.token.clone().or_else(|| std::env::var("BIOWATCH_TOKEN").ok());
    let client = ApiClient::new(&server, token)?;

    match cli.command {
        Commands::Admins { cmd } => commands::resource::handle(Resource::Admins, cmd, &client, output_format).await,
        Commands::Profiles { cmd } => commands::resource::handle(Resource::Profiles, cmd, &client, output_format).await,
        Commands::Species { cmd } => commands::resource::handle(Resource::Species, cmd, &client, output_format).await,
        Commands::Observations { cmd } => {
            commands::resource::handle(Resource::Observations, cmd, &client, output_format).await
        }
        Commands::Server { cmd } => commands::server::handle(cmd, &client, output_format).await,
    }
}
