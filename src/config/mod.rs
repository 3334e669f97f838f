use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid upstream URL '{0}'")]
    InvalidUpstreamUrl(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub upstream: UpstreamConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Connection details for the Supabase project behind the proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub url: String,
    #[serde(skip_serializing)]
    pub anon_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub port: u16,
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    /// Empty means any origin
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        let config = match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides();

        config.validate()?;
        Ok(config)
    }

    fn with_env_overrides(mut self) -> Self {
        // Upstream
        if let Ok(v) = env::var("SUPABASE_URL") {
            self.upstream.url = v.trim_end_matches('/').to_string();
        }
        if let Ok(v) = env::var("SUPABASE_ANON_KEY") {
            self.upstream.anon_key = v;
        }

        // API overrides
        if let Some(port) = env::var("API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.api.port = port;
        }
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.url.is_empty() {
            return Err(ConfigError::Missing("SUPABASE_URL"));
        }
        if url::Url::parse(&self.upstream.url).is_err() {
            return Err(ConfigError::InvalidUpstreamUrl(self.upstream.url.clone()));
        }
        if self.upstream.anon_key.is_empty() {
            return Err(ConfigError::Missing("SUPABASE_ANON_KEY"));
        }
        Ok(())
    }

    /// Development preset, pointing at a local `supabase start` stack
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            upstream: UpstreamConfig {
                url: "http://localhost:54321".to_string(),
                anon_key: String::new(),
            },
            api: ApiConfig {
                port: 3000,
                enable_request_logging: true,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec![],
            },
        }
    }

    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            upstream: UpstreamConfig {
                url: String::new(),
                anon_key: String::new(),
            },
            api: ApiConfig {
                port: 3000,
                enable_request_logging: true,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.biodiversity-watch.app".to_string()],
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            upstream: UpstreamConfig {
                url: String::new(),
                anon_key: String::new(),
            },
            api: ApiConfig {
                port: 3000,
                enable_request_logging: false,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://biodiversity-watch.app".to_string()],
            },
        }
    }

    /// Development preset aimed at an explicit upstream, used by tests and tooling
    pub fn with_upstream(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let mut config = Self::development();
        config.upstream = UpstreamConfig {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        };
        config
    }
}
