use crate::filter::ListParams;
use crate::upstream::models::{Admin, AdminFields, AdminPatch};
use crate::upstream::{Repository, UpstreamClient, UpstreamError};

/// Admin accounts stored in the `admins` table
#[derive(Clone)]
pub struct AdminService {
    repository: Repository<Admin>,
}

impl AdminService {
    pub fn new(client: UpstreamClient) -> Self {
        Self { repository: Repository::new(client) }
    }

    pub async fn list(&self, token: &str, params: &ListParams) -> Result<Vec<Admin>, UpstreamError> {
        self.repository.list(token, params).await
    }

    pub async fn get_by_id(&self, token: &str, id: &str) -> Result<Admin, UpstreamError> {
        self.repository.get_by_id(token, id).await
    }

    pub async fn get_by_email(&self, token: &str, email: &str) -> Result<Admin, UpstreamError> {
        self.repository.select_404(token, "email", email).await
    }

    pub async fn create(&self, token: &str, admin: &AdminFields) -> Result<Admin, UpstreamError> {
        let created = self.repository.create(token, admin).await?;
        tracing::info!("Admin {} created", created.id);
        Ok(created)
    }

    pub async fn update(&self, token: &str, id: &str, patch: &AdminPatch) -> Result<Admin, UpstreamError> {
        self.repository.update(token, id, patch).await
    }

    pub async fn delete(&self, token: &str, id: &str) -> Result<(), UpstreamError> {
        self.repository.delete(token, id).await
    }
}
