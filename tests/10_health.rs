mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_root_describes_service() -> Result<()> {
    let env = common::spawn().await?;

    let body: Value = env.client.get(env.url("/")).send().await?.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Biodiversity Watch API");
    assert_eq!(body["data"]["pagination"]["page_size"], 5);

    Ok(())
}

#[tokio::test]
async fn test_health_reports_reachable_upstream() -> Result<()> {
    let env = common::spawn().await?;

    let response = env.client.get(env.url("/health")).send().await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["upstream"], "ok");

    // Probe hits the REST root, never a table
    assert!(env.upstream.requests().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_health_degrades_when_upstream_is_down() -> Result<()> {
    let dead_port = portpicker::pick_unused_port().expect("free port");
    let env = common::spawn_with_upstream(
        common::FakeUpstream::default(),
        &format!("http://127.0.0.1:{}", dead_port),
    )
    .await?;

    let response = env.client.get(env.url("/health")).send().await?;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
    assert!(body["message"].as_str().unwrap_or_default().starts_with("Upstream store unavailable"));

    Ok(())
}

#[tokio::test]
async fn test_unreachable_upstream_is_bad_gateway() -> Result<()> {
    let dead_port = portpicker::pick_unused_port().expect("free port");
    let env = common::spawn_with_upstream(
        common::FakeUpstream::default(),
        &format!("http://127.0.0.1:{}", dead_port),
    )
    .await?;

    let (status, body) = env.get("/api/species").await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "BAD_GATEWAY");

    Ok(())
}
