use crate::filter::ListParams;
use crate::upstream::models::{Profile, ProfileFields, ProfilePatch};
use crate::upstream::{Repository, UpstreamClient, UpstreamError};

#[derive(Clone)]
pub struct ProfileService {
    repository: Repository<Profile>,
}

impl ProfileService {
    pub fn new(client: UpstreamClient) -> Self {
        Self { repository: Repository::new(client) }
    }

    pub async fn list(&self, token: &str, params: &ListParams) -> Result<Vec<Profile>, UpstreamError> {
        self.repository.list(token, params).await
    }

    pub async fn get_by_id(&self, token: &str, id: &str) -> Result<Profile, UpstreamError> {
        self.repository.get_by_id(token, id).await
    }

    /// Profiles are keyed by the auth user's email as well as by id
    pub async fn get_by_email(&self, token: &str, email: &str) -> Result<Profile, UpstreamError> {
        self.repository.select_404(token, "email", email).await
    }

    pub async fn create(&self, token: &str, profile: &ProfileFields) -> Result<Profile, UpstreamError> {
        let created = self.repository.create(token, profile).await?;
        tracing::info!("Profile {} created for {}", created.id, created.fields.email);
        Ok(created)
    }

    pub async fn update(&self, token: &str, id: &str, patch: &ProfilePatch) -> Result<Profile, UpstreamError> {
        self.repository.update(token, id, patch).await
    }

    pub async fn delete(&self, token: &str, id: &str) -> Result<(), UpstreamError> {
        self.repository.delete(token, id).await
    }
}
