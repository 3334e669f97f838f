//! Test harness: an in-process fake PostgREST upstream plus the proxy app,
//! each on its own port. Every test gets a fresh pair, so no state is shared.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::{any, get},
    Router,
};
use serde_json::{json, Value};

use biodiversity_watch_api::{app, AppConfig, AppState};

pub const ANON_KEY: &str = "test-anon-key";
pub const USER_TOKEN: &str = "Bearer test-user-token";
/// Token the fake upstream treats as expired
pub const EXPIRED_TOKEN: &str = "Bearer expired";

/// One request as seen by the fake upstream
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub table: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
    pub apikey: Option<String>,
    pub prefer: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct FakeStore {
    tables: HashMap<String, Vec<Value>>,
    requests: Vec<RecordedRequest>,
    sequence: i64,
    suppress_representation: bool,
}

/// Minimal PostgREST look-alike: eq/ilike filters, order, limit/offset and
/// `Prefer: return=representation`
#[derive(Clone, Default)]
pub struct FakeUpstream {
    store: Arc<Mutex<FakeStore>>,
}

impl FakeUpstream {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.store.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.store.lock().unwrap().requests.last().cloned()
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.store.lock().unwrap().tables.get(table).cloned().unwrap_or_default()
    }

    /// Make POST answer 201 with an empty row set
    pub fn suppress_representation(&self) {
        self.store.lock().unwrap().suppress_representation = true;
    }

    fn router(&self) -> Router {
        Router::new()
            .route("/rest/v1/", get(fake_root))
            .route("/rest/v1/:table", any(fake_table))
            .with_state(self.clone())
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

fn json_response(status: StatusCode, body: Value) -> axum::response::Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body.to_string()).into_response()
}

async fn fake_root(headers: HeaderMap) -> axum::response::Response {
    if header_string(&headers, "apikey").as_deref() != Some(ANON_KEY) {
        return json_response(StatusCode::UNAUTHORIZED, json!({ "message": "Invalid API key" }));
    }
    json_response(StatusCode::OK, json!({ "swagger": "2.0" }))
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn row_matches(row: &Value, filters: &[(String, String)]) -> bool {
    filters.iter().all(|(column, condition)| {
        let cell = row.get(column).map(cell_text).unwrap_or_default();
        if let Some(expected) = condition.strip_prefix("eq.") {
            cell == expected
        } else if let Some(pattern) = condition.strip_prefix("ilike.") {
            let needle = pattern.trim_matches('*').to_lowercase();
            cell.to_lowercase().contains(&needle)
        } else {
            false
        }
    })
}

async fn fake_table(
    State(upstream): State<FakeUpstream>,
    method: Method,
    Path(table): Path<String>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
    body: Bytes,
) -> axum::response::Response {
    let query: Vec<(String, String)> = url::form_urlencoded::parse(raw_query.unwrap_or_default().as_bytes())
        .into_owned()
        .collect();
    let body_json: Option<Value> = serde_json::from_slice(&body).ok();

    let mut store = upstream.store.lock().unwrap();
    store.requests.push(RecordedRequest {
        method: method.clone(),
        table: table.clone(),
        query: query.clone(),
        authorization: header_string(&headers, "authorization"),
        apikey: header_string(&headers, "apikey"),
        prefer: header_string(&headers, "prefer"),
        content_type: header_string(&headers, "content-type"),
        body: body_json.clone(),
    });

    if header_string(&headers, "apikey").as_deref() != Some(ANON_KEY) {
        return json_response(StatusCode::UNAUTHORIZED, json!({ "message": "Invalid API key" }));
    }
    if header_string(&headers, "authorization").as_deref() == Some(EXPIRED_TOKEN) {
        return json_response(
            StatusCode::UNAUTHORIZED,
            json!({ "code": "PGRST301", "message": "JWT expired", "details": null, "hint": null }),
        );
    }

    let filters: Vec<(String, String)> = query
        .iter()
        .filter(|(k, _)| !matches!(k.as_str(), "order" | "limit" | "offset" | "select"))
        .cloned()
        .collect();
    let wants_rows = header_string(&headers, "prefer").is_some_and(|p| p.contains("return=representation"));

    store.sequence += 1;
    let sequence = store.sequence;
    let suppress = store.suppress_representation;
    let timestamp = chrono::DateTime::from_timestamp(1_700_000_000 + sequence, 0)
        .unwrap()
        .to_rfc3339();
    let rows = store.tables.entry(table).or_default();

    match method {
        Method::GET => {
            let mut selected: Vec<Value> = rows.iter().filter(|r| row_matches(r, &filters)).cloned().collect();
            if let Some(order) = query.iter().find(|(k, _)| k == "order").map(|(_, v)| v.clone()) {
                let (column, direction) = order.split_once('.').unwrap_or((order.as_str(), "asc"));
                selected.sort_by_key(|r| r.get(column).map(cell_text).unwrap_or_default());
                if direction == "desc" {
                    selected.reverse();
                }
            }
            let offset = query
                .iter()
                .find(|(k, _)| k == "offset")
                .and_then(|(_, v)| v.parse::<usize>().ok())
                .unwrap_or(0);
            let limit = query
                .iter()
                .find(|(k, _)| k == "limit")
                .and_then(|(_, v)| v.parse::<usize>().ok())
                .unwrap_or(usize::MAX);
            let page: Vec<Value> = selected.into_iter().skip(offset).take(limit).collect();
            json_response(StatusCode::OK, Value::Array(page))
        }
        Method::POST => {
            let Some(Value::Object(mut fields)) = body_json else {
                return json_response(StatusCode::BAD_REQUEST, json!({ "message": "Empty or invalid json" }));
            };
            fields.insert("id".into(), json!(uuid::Uuid::new_v4().to_string()));
            fields.insert("created_at".into(), json!(timestamp));
            fields.insert("updated_at".into(), json!(timestamp));
            let row = Value::Object(fields);
            rows.push(row.clone());
            if suppress {
                json_response(StatusCode::CREATED, json!([]))
            } else if wants_rows {
                json_response(StatusCode::CREATED, json!([row]))
            } else {
                StatusCode::CREATED.into_response()
            }
        }
        Method::PATCH => {
            let Some(Value::Object(changes)) = body_json else {
                return json_response(StatusCode::BAD_REQUEST, json!({ "message": "Empty or invalid json" }));
            };
            let mut updated = vec![];
            for row in rows.iter_mut().filter(|r| row_matches(r, &filters)) {
                if let Value::Object(existing) = row {
                    for (k, v) in &changes {
                        existing.insert(k.clone(), v.clone());
                    }
                    existing.insert("updated_at".into(), json!(timestamp));
                }
                updated.push(row.clone());
            }
            if wants_rows {
                json_response(StatusCode::OK, Value::Array(updated))
            } else {
                StatusCode::NO_CONTENT.into_response()
            }
        }
        Method::DELETE => {
            rows.retain(|r| !row_matches(r, &filters));
            StatusCode::NO_CONTENT.into_response()
        }
        _ => json_response(StatusCode::METHOD_NOT_ALLOWED, json!({ "message": "method not allowed" })),
    }
}

async fn serve(router: Router) -> Result<String> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    Ok(format!("http://127.0.0.1:{}", port))
}

/// Proxy plus fake upstream, driven over real HTTP
pub struct TestEnv {
    pub base_url: String,
    pub upstream: FakeUpstream,
    pub client: reqwest::Client,
}

pub async fn spawn() -> Result<TestEnv> {
    let upstream = FakeUpstream::default();
    let upstream_url = serve(upstream.router()).await?;
    spawn_with_upstream(upstream, &upstream_url).await
}

/// Proxy pointed at `upstream_url`, which may be unreachable
pub async fn spawn_with_upstream(upstream: FakeUpstream, upstream_url: &str) -> Result<TestEnv> {
    let mut config = AppConfig::with_upstream(upstream_url, ANON_KEY);
    config.api.enable_request_logging = false;
    let state = AppState::new(config)?;
    let base_url = serve(app(state)).await?;

    Ok(TestEnv {
        base_url,
        upstream,
        client: reqwest::Client::new(),
    })
}

impl TestEnv {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn finish(response: reqwest::Response) -> Result<(reqwest::StatusCode, Value)> {
        let status = response.status();
        let body = response.json::<Value>().await.context("response is not JSON")?;
        Ok((status, body))
    }

    pub async fn get(&self, path: &str) -> Result<(reqwest::StatusCode, Value)> {
        let response = self.client.get(self.url(path)).header("Authorization", USER_TOKEN).send().await?;
        Self::finish(response).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<(reqwest::StatusCode, Value)> {
        let response = self
            .client
            .post(self.url(path))
            .header("Authorization", USER_TOKEN)
            .json(body)
            .send()
            .await?;
        Self::finish(response).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> Result<(reqwest::StatusCode, Value)> {
        let response = self
            .client
            .patch(self.url(path))
            .header("Authorization", USER_TOKEN)
            .json(body)
            .send()
            .await?;
        Self::finish(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(reqwest::StatusCode, Value)> {
        let response = self.client.delete(self.url(path)).header("Authorization", USER_TOKEN).send().await?;
        Self::finish(response).await
    }

    /// Create a row through the proxy and return its generated id
    pub async fn create(&self, path: &str, body: &Value) -> Result<String> {
        let (status, payload) = self.post(path, body).await?;
        anyhow::ensure!(status == reqwest::StatusCode::CREATED, "create failed with {}: {}", status, payload);
        payload["data"]["id"]
            .as_str()
            .map(str::to_string)
            .context("created record has no id")
    }
}

pub fn jaguar() -> Value {
    json!({
        "scientific_name": "Panthera onca",
        "common_name": "Jaguar",
        "type": "mammal",
        "habitat": "Tropical forest",
        "family": "Felidae"
    })
}

pub fn specie(scientific_name: &str, common_name: &str) -> Value {
    json!({ "scientific_name": scientific_name, "common_name": common_name })
}
