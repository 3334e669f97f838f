use std::io::Read;

use anyhow::{anyhow, Context};
use clap::Subcommand;
use reqwest::Method;
use serde_json::Value;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_envelope, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ResourceCommands {
    #[command(about = "List records, newest first when paginated")]
    List {
        #[arg(long, help = "1-based page number (5 records per page)")]
        page: Option<i64>,
        #[arg(long, help = "Case-insensitive substring search")]
        search: Option<String>,
    },

    #[command(about = "Get a record by ID")]
    Get {
        #[arg(help = "Record ID")]
        id: String,
    },

    #[command(about = "Look up by alternate key: email (admins, profiles), scientific name (species), observer user id (observations)")]
    Find {
        #[arg(help = "Value to look up")]
        value: String,
    },

    #[command(about = "Create record from JSON on stdin")]
    Create,

    #[command(about = "Partially update a record from JSON on stdin")]
    Update {
        #[arg(help = "Record ID to update")]
        id: String,
    },

    #[command(about = "Delete a record")]
    Delete {
        #[arg(help = "Record ID to delete")]
        id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Admins,
    Profiles,
    Species,
    Observations,
}

impl Resource {
    pub fn segment(&self) -> &'static str {
        match self {
            Resource::Admins => "admins",
            Resource::Profiles => "profiles",
            Resource::Species => "species",
            Resource::Observations => "observations",
        }
    }

    /// Path segment in front of the alternate key
    pub fn find_segment(&self) -> &'static str {
        match self {
            Resource::Admins | Resource::Profiles => "email",
            Resource::Species => "scientific-name",
            Resource::Observations => "user",
        }
    }
}

pub async fn handle(
    resource: Resource,
    cmd: ResourceCommands,
    client: &ApiClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let base = ["api", resource.segment()];

    match cmd {
        ResourceCommands::List { page, search } => {
            let mut query = Vec::new();
            if let Some(page) = page {
                query.push(("page", page.to_string()));
            }
            if let Some(search) = search {
                query.push(("search", search));
            }
            let envelope = client.request(Method::GET, client.url(&base, &query)?, None).await?;
            output_envelope(&output_format, &envelope)
        }
        ResourceCommands::Get { id } => {
            let url = client.url(&[base[0], base[1], id.as_str()], &[])?;
            let envelope = client.request(Method::GET, url, None).await?;
            output_envelope(&output_format, &envelope)
        }
        ResourceCommands::Find { value } => {
            let url = client.url(&[base[0], base[1], resource.find_segment(), value.as_str()], &[])?;
            let envelope = client.request(Method::GET, url, None).await?;
            output_envelope(&output_format, &envelope)
        }
        ResourceCommands::Create => {
            let body = read_json_object_from_stdin()?;
            let envelope = client.request(Method::POST, client.url(&base, &[])?, Some(&body)).await?;
            let id = envelope["data"]["id"].as_str().unwrap_or_default().to_string();
            output_success(&output_format, &format!("Created {} {}", resource.segment(), id), envelope.get("data").cloned())
        }
        ResourceCommands::Update { id } => {
            let body = read_json_object_from_stdin()?;
            let url = client.url(&[base[0], base[1], id.as_str()], &[])?;
            let envelope = client.request(Method::PATCH, url, Some(&body)).await?;
            output_success(&output_format, &format!("Updated {} {}", resource.segment(), id), envelope.get("data").cloned())
        }
        ResourceCommands::Delete { id } => {
            let url = client.url(&[base[0], base[1], id.as_str()], &[])?;
            client.request(Method::DELETE, url, None).await?;
            output_success(&output_format, &format!("Deleted {} {}", resource.segment(), id), None)
        }
    }
}

fn read_json_object_from_stdin() -> anyhow::Result<Value> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input).context("failed to read stdin")?;
    parse_json_object(&input)
}

fn parse_json_object(input: &str) -> anyhow::Result<Value> {
    let value: Value = serde_json::from_str(input).context("stdin is not valid JSON")?;
    if !value.is_object() {
        return Err(anyhow!("expected a JSON object on stdin"));
    }
    Ok(value)
}
