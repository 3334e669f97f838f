use axum::extract::State;

use crate::filter::ListParams;
use crate::middleware::{ApiResponse, ApiResult, AuthToken, JsonBody, PathParam, QueryParams};
use crate::state::AppState;
use crate::upstream::models::{Observation, ObservationFields, ObservationPatch};

/// GET /api/observations - List observations (`?page=`, `?search=` on specie common name)
pub async fn list(
    State(state): State<AppState>,
    token: AuthToken,
    QueryParams(params): QueryParams<ListParams>,
) -> ApiResult<Vec<Observation>> {
    let observations = state.observations.list(token.as_str(), &params).await?;
    tracing::info!("Found {} observations", observations.len());
    Ok(ApiResponse::list(observations, params.pagination()))
}

/// GET /api/observations/user/:user_id - Observations reported by one user
pub async fn list_by_user(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(user_id): PathParam<String>,
    QueryParams(params): QueryParams<ListParams>,
) -> ApiResult<Vec<Observation>> {
    let observations = state
        .observations
        .list_by_observer(token.as_str(), &user_id, &params)
        .await?;
    Ok(ApiResponse::list(observations, params.pagination()))
}

/// GET /api/observations/:id
pub async fn get(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(id): PathParam<String>,
) -> ApiResult<Observation> {
    tracing::info!("Fetching observation {}", id);
    let observation = state.observations.get_by_id(token.as_str(), &id).await?;
    Ok(ApiResponse::success(observation))
}

/// POST /api/observations
pub async fn create(
    State(state): State<AppState>,
    token: AuthToken,
    JsonBody(payload): JsonBody<ObservationFields>,
) -> ApiResult<Observation> {
    let observation = state.observations.create(token.as_str(), &payload).await?;
    Ok(ApiResponse::created(observation).with_message("Observation created"))
}

/// PATCH /api/observations/:id - e.g. flip `verification_status` after review
pub async fn update(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(id): PathParam<String>,
    JsonBody(patch): JsonBody<ObservationPatch>,
) -> ApiResult<Observation> {
    let observation = state.observations.update(token.as_str(), &id, &patch).await?;
    Ok(ApiResponse::success(observation).with_message("Observation updated"))
}

/// DELETE /api/observations/:id
pub async fn delete(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(id): PathParam<String>,
) -> ApiResult<()> {
    state.observations.delete(token.as_str(), &id).await?;
    Ok(ApiResponse::message_only(format!("Observation {} deleted", id)))
}
