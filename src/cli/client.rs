use anyhow::{anyhow, Context};
use reqwest::Method;
use serde_json::Value;
use url::Url;

/// Thin reqwest wrapper around the proxy's own REST surface
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url).with_context(|| format!("invalid server URL '{}'", base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("invalid server URL '{}'", base_url));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Build `<base>/<segments...>?<query>` with every segment percent-encoded
    pub fn url(&self, segments: &[&str], query: &[(&str, String)]) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("server URL cannot take a path"))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// `Authorization` value; bare tokens get the `Bearer` scheme
    fn authorization(&self) -> anyhow::Result<String> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| anyhow!("no access token; pass --token or set BIOWATCH_TOKEN"))?;
        if token.starts_with("Bearer ") {
            Ok(token.to_string())
        } else {
            Ok(format!("Bearer {}", token))
        }
    }

    /// Authenticated call; returns the envelope or fails with the server's message
    pub async fn request(&self, method: Method, url: Url, body: Option<&Value>) -> anyhow::Result<Value> {
        let mut request = self.http.request(method, url).header("Authorization", self.authorization()?);
        if let Some(body) = body {
            request = request.json(body);
        }
        Self::envelope(request.send().await?).await
    }

    /// Call a public endpoint (`/`, `/health`)
    pub async fn get_public(&self, url: Url) -> anyhow::Result<Value> {
        Self::envelope(self.http.get(url).send().await?).await
    }

    async fn envelope(response: reqwest::Response) -> anyhow::Result<Value> {
        let status = response.status();
        let body: Value = response.json().await.with_context(|| format!("non-JSON response ({})", status))?;
        if !status.is_success() {
            let message = body.get("message").and_then(|m| m.as_str()).unwrap_or("request failed");
            return Err(anyhow!("{} ({})", message, status));
        }
        Ok(body)
    }
}
