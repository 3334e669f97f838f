use crate::filter::ListParams;
use crate::upstream::models::{Specie, SpecieFields, SpeciePatch};
use crate::upstream::{Repository, UpstreamClient, UpstreamError};

/// Species catalogue. Observations point at these rows through `id_specie`.
#[derive(Clone)]
pub struct SpecieService {
    repository: Repository<Specie>,
}

impl SpecieService {
    pub fn new(client: UpstreamClient) -> Self {
        Self { repository: Repository::new(client) }
    }

    /// `search` matches the common name
    pub async fn list(&self, token: &str, params: &ListParams) -> Result<Vec<Specie>, UpstreamError> {
        self.repository.list(token, params).await
    }

    pub async fn get_by_id(&self, token: &str, id: &str) -> Result<Specie, UpstreamError> {
        self.repository.get_by_id(token, id).await
    }

    /// Exact match on the scientific name. With duplicates the first row upstream returns wins.
    pub async fn get_by_scientific_name(&self, token: &str, scientific_name: &str) -> Result<Specie, UpstreamError> {
        self.repository.select_404(token, "scientific_name", scientific_name).await
    }

    pub async fn create(&self, token: &str, specie: &SpecieFields) -> Result<Specie, UpstreamError> {
        let created = self.repository.create(token, specie).await?;
        tracing::info!("Specie {} ({}) created", created.id, created.fields.scientific_name);
        Ok(created)
    }

    pub async fn update(&self, token: &str, id: &str, patch: &SpeciePatch) -> Result<Specie, UpstreamError> {
        self.repository.update(token, id, patch).await
    }

    pub async fn delete(&self, token: &str, id: &str) -> Result<(), UpstreamError> {
        self.repository.delete(token, id).await
    }
}
