use axum::body::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::UpstreamConfig;
use crate::filter::{FilterError, REST_PREFIX};
use crate::types::Operation;

/// Errors from talking to the upstream store
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer; the upstream payload is kept so callers can forward it
    #[error("Upstream responded with {status}")]
    Status { status: StatusCode, body: Option<Value> },

    #[error("Failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    NotFound(String),

    #[error("Upstream returned no representation for the new {0}")]
    EmptyRepresentation(&'static str),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Raw answer from the upstream store
#[derive(Debug)]
pub struct UpstreamResponse {
    pub body: Bytes,
}

impl UpstreamResponse {
    /// Decode a PostgREST row set. An empty body counts as no rows.
    pub fn rows<T: DeserializeOwned>(&self) -> Result<Vec<T>, UpstreamError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(vec![]);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// HTTP client for the Supabase REST endpoint. Cheap to clone.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        Url::parse(&config.url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        })
    }

    /// Forward one request. `token` is the caller's Authorization header,
    /// passed through untouched.
    pub async fn send(
        &self,
        operation: Operation,
        path_and_query: &str,
        token: &str,
        body: Option<&Value>,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let url = Url::parse(&format!("{}{}", self.base_url, path_and_query))?;
        tracing::debug!("upstream {:?} {}", operation, url.path());

        let mut request = self
            .http
            .request(operation.method(), url)
            .header(AUTHORIZATION, token)
            .header("apikey", &self.anon_key)
            .header(CONTENT_TYPE, "application/json");

        if let Some(prefer) = operation.prefer() {
            request = request.header("Prefer", prefer);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Upstream transport error: {}", e);
            UpstreamError::Transport(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = if bytes.is_empty() {
                None
            } else {
                Some(serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned())))
            };
            tracing::warn!("Upstream {:?} {} answered {}", operation, path_and_query, status);
            return Err(UpstreamError::Status { status, body });
        }

        tracing::debug!("upstream answered {}", status);
        Ok(UpstreamResponse { body: bytes })
    }

    /// Probe the REST root with the service key
    pub async fn ping(&self) -> Result<StatusCode, UpstreamError> {
        let url = Url::parse(&format!("{}{}/", self.base_url, REST_PREFIX))?;
        let response = self
            .http
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(status)
        } else {
            Err(UpstreamError::Status { status, body: None })
        }
    }
}
