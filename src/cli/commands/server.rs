use clap::Subcommand;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_envelope, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Check API and upstream store health from the /health endpoint")]
    Health,

    #[command(about = "Show server information from the API root endpoint")]
    Info,
}

pub async fn handle(cmd: ServerCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Health => {
            let envelope = client.get_public(client.url(&["health"], &[])?).await?;
            let status = envelope["data"]["status"].as_str().unwrap_or("unknown").to_string();
            output_success(&output_format, &format!("Server status: {}", status), envelope.get("data").cloned())
        }
        ServerCommands::Info => {
            let envelope = client.get_public(client.url(&[], &[])?).await?;
            output_envelope(&output_format, &envelope)
        }
    }
}
