use axum::{extract::State, http::HeaderValue, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Proxied resources (Authorization header required)
        .merge(admin_routes())
        .merge(profile_routes())
        .merge(specie_routes())
        .merge(observation_routes());

    let config = &state.config;
    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));
    }

    router.with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();
    CorsLayer::permissive().allow_origin(AllowOrigin::list(origins))
}

fn admin_routes() -> Router<AppState> {
    use handlers::admin;

    Router::new()
        .route("/api/admins", get(admin::list).post(admin::create))
        .route(
            "/api/admins/:id",
            get(admin::get).patch(admin::update).delete(admin::delete),
        )
        .route("/api/admins/email/:email", get(admin::get_by_email))
}

fn profile_routes() -> Router<AppState> {
    use handlers::profile;

    Router::new()
        .route("/api/profiles", get(profile::list).post(profile::create))
        .route(
            "/api/profiles/:id",
            get(profile::get).patch(profile::update).delete(profile::delete),
        )
        .route("/api/profiles/email/:email", get(profile::get_by_email))
}

fn specie_routes() -> Router<AppState> {
    use handlers::specie;

    Router::new()
        .route("/api/species", get(specie::list).post(specie::create))
        .route(
            "/api/species/:id",
            get(specie::get).patch(specie::update).delete(specie::delete),
        )
        .route(
            "/api/species/scientific-name/:name",
            get(specie::get_by_scientific_name),
        )
}

fn observation_routes() -> Router<AppState> {
    use handlers::observation;

    Router::new()
        .route(
            "/api/observations",
            get(observation::list).post(observation::create),
        )
        .route(
            "/api/observations/:id",
            get(observation::get)
                .patch(observation::update)
                .delete(observation::delete),
        )
        .route("/api/observations/user/:user_id", get(observation::list_by_user))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Biodiversity Watch API",
            "version": version,
            "description": "REST proxy in front of the Biodiversity Watch Supabase store",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "admins": "/api/admins[/:id], /api/admins/email/:email",
                "profiles": "/api/profiles[/:id], /api/profiles/email/:email",
                "species": "/api/species[/:id], /api/species/scientific-name/:name",
                "observations": "/api/observations[/:id], /api/observations/user/:user_id",
            },
            "pagination": {
                "query": "?page=<n>&search=<text>",
                "page_size": crate::filter::PAGE_SIZE,
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.upstream.ping().await.map_err(|e| {
        tracing::warn!("Health check failed: {}", e);
        ApiError::service_unavailable(format!("Upstream store unavailable: {}", e))
    })?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "upstream": "ok"
        }
    })))
}
