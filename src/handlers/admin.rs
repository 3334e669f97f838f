use axum::extract::State;

use crate::filter::ListParams;
use crate::middleware::{ApiResponse, ApiResult, AuthToken, JsonBody, PathParam, QueryParams};
use crate::state::AppState;
use crate::upstream::models::{Admin, AdminFields, AdminPatch};

/// GET /api/admins - List admins (`?page=`, `?search=` on username)
pub async fn list(
    State(state): State<AppState>,
    token: AuthToken,
    QueryParams(params): QueryParams<ListParams>,
) -> ApiResult<Vec<Admin>> {
    let admins = state.admins.list(token.as_str(), &params).await?;
    Ok(ApiResponse::list(admins, params.pagination()))
}

/// GET /api/admins/:id
pub async fn get(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(id): PathParam<String>,
) -> ApiResult<Admin> {
    let admin = state.admins.get_by_id(token.as_str(), &id).await?;
    Ok(ApiResponse::success(admin))
}

/// GET /api/admins/email/:email
pub async fn get_by_email(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(email): PathParam<String>,
) -> ApiResult<Admin> {
    let admin = state.admins.get_by_email(token.as_str(), &email).await?;
    Ok(ApiResponse::success(admin))
}

/// POST /api/admins
pub async fn create(
    State(state): State<AppState>,
    token: AuthToken,
    JsonBody(payload): JsonBody<AdminFields>,
) -> ApiResult<Admin> {
    let admin = state.admins.create(token.as_str(), &payload).await?;
    Ok(ApiResponse::created(admin).with_message("Admin created"))
}

/// PATCH /api/admins/:id
pub async fn update(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(id): PathParam<String>,
    JsonBody(patch): JsonBody<AdminPatch>,
) -> ApiResult<Admin> {
    let admin = state.admins.update(token.as_str(), &id, &patch).await?;
    Ok(ApiResponse::success(admin).with_message("Admin updated"))
}

/// DELETE /api/admins/:id
pub async fn delete(
    State(state): State<AppState>,
    token: AuthToken,
    PathParam(id): PathParam<String>,
) -> ApiResult<()> {
    state.admins.delete(token.as_str(), &id).await?;
    Ok(ApiResponse::message_only(format!("Admin {} deleted", id)))
}
