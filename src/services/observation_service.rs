use crate::filter::ListParams;
use crate::upstream::models::{Observation, ObservationFields, ObservationPatch};
use crate::upstream::{Repository, UpstreamClient, UpstreamError};

#[derive(Clone)]
pub struct ObservationService {
    repository: Repository<Observation>,
}

impl ObservationService {
    pub fn new(client: UpstreamClient) -> Self {
        Self { repository: Repository::new(client) }
    }

    pub async fn list(&self, token: &str, params: &ListParams) -> Result<Vec<Observation>, UpstreamError> {
        self.repository.list(token, params).await
    }

    /// Observations reported by one observer, newest first when paginated
    pub async fn list_by_observer(
        &self,
        token: &str,
        user_id: &str,
        params: &ListParams,
    ) -> Result<Vec<Observation>, UpstreamError> {
        let mut filter = self.repository.filter()?;
        filter.where_eq("id_observer_user", user_id)?;
        let observations = self.repository.list_filtered(token, filter, params).await?;
        tracing::info!("Found {} observations for user {}", observations.len(), user_id);
        Ok(observations)
    }

    pub async fn get_by_id(&self, token: &str, id: &str) -> Result<Observation, UpstreamError> {
        self.repository.get_by_id(token, id).await
    }

    pub async fn create(&self, token: &str, observation: &ObservationFields) -> Result<Observation, UpstreamError> {
        let created = self.repository.create(token, observation).await?;
        tracing::info!(
            "Observation {} of {} recorded by {}",
            created.id,
            created.fields.specie_scientific_name,
            created.fields.id_observer_user
        );
        Ok(created)
    }

    pub async fn update(&self, token: &str, id: &str, patch: &ObservationPatch) -> Result<Observation, UpstreamError> {
        self.repository.update(token, id, patch).await
    }

    pub async fn delete(&self, token: &str, id: &str) -> Result<(), UpstreamError> {
        self.repository.delete(token, id).await
    }
}
