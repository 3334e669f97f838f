use axum::extract::State;

use crate::filter::ListParams;
use crate::middleware::{ApiResponse, ApiResult, AuthToken, JsonBody, PathParam, QueryParams};
use crate::state::AppState;
use crate::upstream::models::{Profile, ProfileFields, ProfilePatch};

/// GET /api/profiles - List profiles (`?page=`, `?search=` on name)
pub async fn list(
    State(state): State<AppState>,
    token: AuthToken,
    QueryParams(params): QueryParams<ListParams>,
) -> ApiResult<Vec<Profile>> {
    let profiles = state.profiles.list(token.as_str(), &params).await?;
    Ok(ApiResponse::list(profiles, params.pagination()))
}

/// GET /api/profiles/:id
pub async fn get(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(id): PathParam<String>,
) -> ApiResult<Profile> {
    let profile = state.profiles.get_by_id(token.as_str(), &id).await?;
    Ok(ApiResponse::success(profile))
}

/// GET /api/profiles/email/:email
pub async fn get_by_email(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(email): PathParam<String>,
) -> ApiResult<Profile> {
    let profile = state.profiles.get_by_email(token.as_str(), &email).await?;
    Ok(ApiResponse::success(profile))
}

/// POST /api/profiles
pub async fn create(
    State(state): State<AppState>,
    token: AuthToken,
    JsonBody(payload): JsonBody<ProfileFields>,
) -> ApiResult<Profile> {
    let profile = state.profiles.create(token.as_str(), &payload).await?;
    Ok(ApiResponse::created(profile).with_message("Profile created"))
}

/// PATCH /api/profiles/:id
pub async fn update(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(id): PathParam<String>,
    JsonBody(patch): JsonBody<ProfilePatch>,
) -> ApiResult<Profile> {
    let profile = state.profiles.update(token.as_str(), &id, &patch).await?;
    Ok(ApiResponse::success(profile).with_message("Profile updated"))
}

/// DELETE /api/profiles/:id
pub async fn delete(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(id): PathParam<String>,
) -> ApiResult<()> {
    state.profiles.delete(token.as_str(), &id).await?;
    Ok(ApiResponse::message_only(format!("Profile {} deleted", id)))
}
