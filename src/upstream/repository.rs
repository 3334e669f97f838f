use serde::{de::DeserializeOwned, Serialize};

use crate::filter::{Filter, ListParams};
use crate::types::Operation;
use crate::upstream::client::{UpstreamClient, UpstreamError};

/// A table exposed through PostgREST and the payload shapes it accepts
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    const TABLE: &'static str;
    /// Human readable name used in messages
    const LABEL: &'static str;
    const ID_COLUMN: &'static str = "id";
    /// Column matched by the free-text `search` parameter
    const SEARCH_COLUMN: &'static str;

    type Create: Serialize + DeserializeOwned + Send + Sync;
    type Patch: Serialize + DeserializeOwned + Send + Sync;
}

/// Translates typed CRUD calls on `T` into single PostgREST requests
pub struct Repository<T> {
    client: UpstreamClient,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self { client: self.client.clone(), _phantom: std::marker::PhantomData }
    }
}

impl<T: Resource> Repository<T> {
    pub fn new(client: UpstreamClient) -> Self {
        Self {
            client,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn filter(&self) -> Result<Filter, UpstreamError> {
        Ok(Filter::new(T::TABLE)?)
    }

    pub async fn select_any(&self, token: &str, filter: &Filter) -> Result<Vec<T>, UpstreamError> {
        self.client
            .send(Operation::Select, &filter.to_path(), token, None)
            .await?
            .rows()
    }

    /// First row whose `column` equals `value`, in upstream order
    pub async fn select_one(&self, token: &str, column: &str, value: &str) -> Result<Option<T>, UpstreamError> {
        let mut filter = self.filter()?;
        filter.where_eq(column, value)?;
        Ok(self.select_any(token, &filter).await?.into_iter().next())
    }

    pub async fn select_404(&self, token: &str, column: &str, value: &str) -> Result<T, UpstreamError> {
        self.select_one(token, column, value).await?.ok_or_else(|| {
            UpstreamError::NotFound(format!("{} with {} '{}' not found", T::LABEL, column, value))
        })
    }

    /// List with optional search and pagination on top of `filter`
    pub async fn list_filtered(&self, token: &str, mut filter: Filter, params: &ListParams) -> Result<Vec<T>, UpstreamError> {
        if let Some(term) = params.search_term() {
            filter.where_ilike(T::SEARCH_COLUMN, term)?;
        }
        if let Some(pagination) = params.pagination() {
            filter.paginate(pagination)?;
        }
        self.select_any(token, &filter).await
    }

    pub async fn list(&self, token: &str, params: &ListParams) -> Result<Vec<T>, UpstreamError> {
        self.list_filtered(token, self.filter()?, params).await
    }

    pub async fn get_by_id(&self, token: &str, id: &str) -> Result<T, UpstreamError> {
        self.select_404(token, T::ID_COLUMN, id).await
    }

    /// Insert one row and return the stored representation
    pub async fn create(&self, token: &str, payload: &T::Create) -> Result<T, UpstreamError> {
        let body = serde_json::to_value(payload)?;
        let path = self.filter()?.to_path();
        self.client
            .send(Operation::Create, &path, token, Some(&body))
            .await?
            .rows::<T>()?
            .into_iter()
            .next()
            .ok_or(UpstreamError::EmptyRepresentation(T::LABEL))
    }

    /// Partial update: only the fields present in `patch` are sent
    pub async fn update(&self, token: &str, id: &str, patch: &T::Patch) -> Result<T, UpstreamError> {
        let body = serde_json::to_value(patch)?;
        if body.as_object().is_some_and(|o| o.is_empty()) {
            // PostgREST rejects an empty PATCH; nothing to change, so answer with the current row
            return self.get_by_id(token, id).await;
        }

        let mut filter = self.filter()?;
        filter.where_eq(T::ID_COLUMN, id)?;
        self.client
            .send(Operation::Update, &filter.to_path(), token, Some(&body))
            .await?
            .rows::<T>()?
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::NotFound(format!("{} with id '{}' not found", T::LABEL, id)))
    }

    /// Succeeds on any 2xx, whether or not rows were affected
    pub async fn delete(&self, token: &str, id: &str) -> Result<(), UpstreamError> {
        let mut filter = self.filter()?;
        filter.where_eq(T::ID_COLUMN, id)?;
        self.client
            .send(Operation::Delete, &filter.to_path(), token, None)
            .await?;
        Ok(())
    }
}
