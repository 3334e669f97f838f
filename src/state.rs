use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{AdminService, ObservationService, ProfileService, SpecieService};
use crate::upstream::{UpstreamClient, UpstreamError};

/// Immutable per-process state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub upstream: UpstreamClient,
    pub admins: AdminService,
    pub observations: ObservationService,
    pub profiles: ProfileService,
    pub species: SpecieService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, UpstreamError> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        Ok(Self {
            config: Arc::new(config),
            admins: AdminService::new(upstream.clone()),
            observations: ObservationService::new(upstream.clone()),
            profiles: ProfileService::new(upstream.clone()),
            species: SpecieService::new(upstream.clone()),
            upstream,
        })
    }
}
