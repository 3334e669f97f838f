use axum::extract::State;

use crate::filter::ListParams;
use crate::middleware::{ApiResponse, ApiResult, AuthToken, JsonBody, PathParam, QueryParams};
use crate::state::AppState;
use crate::upstream::models::{Specie, SpecieFields, SpeciePatch};

/// GET /api/species - List species (`?page=`, `?search=` on common name)
pub async fn list(
    State(state): State<AppState>,
    token: AuthToken,
    QueryParams(params): QueryParams<ListParams>,
) -> ApiResult<Vec<Specie>> {
    let species = state.species.list(token.as_str(), &params).await?;
    tracing::info!("Listing {} species", species.len());
    Ok(ApiResponse::list(species, params.pagination()))
}

/// GET /api/species/:id
pub async fn get(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(id): PathParam<String>,
) -> ApiResult<Specie> {
    let specie = state.species.get_by_id(token.as_str(), &id).await?;
    Ok(ApiResponse::success(specie))
}

/// GET /api/species/scientific-name/:name
pub async fn get_by_scientific_name(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(name): PathParam<String>,
) -> ApiResult<Specie> {
    let specie = state.species.get_by_scientific_name(token.as_str(), &name).await?;
    Ok(ApiResponse::success(specie))
}

/// POST /api/species
pub async fn create(
    State(state): State<AppState>,
    token: AuthToken,
    JsonBody(payload): JsonBody<SpecieFields>,
) -> ApiResult<Specie> {
    let specie = state.species.create(token.as_str(), &payload).await?;
    Ok(ApiResponse::created(specie).with_message("Specie created"))
}

/// PATCH /api/species/:id
pub async fn update(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(id): PathParam<String>,
    JsonBody(patch): JsonBody<SpeciePatch>,
) -> ApiResult<Specie> {
    let specie = state.species.update(token.as_str(), &id, &patch).await?;
    Ok(ApiResponse::success(specie).with_message("Specie updated"))
}

/// DELETE /api/species/:id
pub async fn delete(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(id): PathParam<String>,
) -> ApiResult<()> {
    state.species.delete(token.as_str(), &id).await?;
    Ok(ApiResponse::message_only(format!("Specie {} deleted", id)))
}
