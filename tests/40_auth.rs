mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_missing_authorization_is_rejected_locally() -> Result<()> {
    let env = common::spawn().await?;

    for path in ["/api/admins", "/api/profiles", "/api/species", "/api/observations"] {
        let response = env.client.get(env.url(path)).send().await?;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", path);
        let body: Value = response.json().await?;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "UNAUTHORIZED");
    }

    // Rejected before any upstream call
    assert!(env.upstream.requests().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_blank_authorization_is_rejected() -> Result<()> {
    let env = common::spawn().await?;

    let response = env
        .client
        .get(env.url("/api/species"))
        .header("Authorization", "   ")
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn test_token_is_forwarded_unchanged() -> Result<()> {
    let env = common::spawn().await?;

    let response = env
        .client
        .get(env.url("/api/profiles"))
        .header("Authorization", "Bearer some.jwt.value")
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let request = env.upstream.last_request().expect("forwarded request");
    assert_eq!(request.authorization.as_deref(), Some("Bearer some.jwt.value"));

    Ok(())
}

#[tokio::test]
async fn test_upstream_rejection_passes_through() -> Result<()> {
    let env = common::spawn().await?;

    let response = env
        .client
        .get(env.url("/api/species"))
        .header("Authorization", common::EXPIRED_TOKEN)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    assert_eq!(body["message"], "JWT expired");
    assert_eq!(body["details"]["code"], "PGRST301");

    Ok(())
}

#[tokio::test]
async fn test_public_routes_need_no_token() -> Result<()> {
    let env = common::spawn().await?;

    let response = env.client.get(env.url("/")).send().await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}
