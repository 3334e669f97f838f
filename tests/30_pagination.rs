mod common;

use anyhow::Result;
use reqwest::StatusCode;

async fn seed_species(env: &common::TestEnv, count: usize) -> Result<()> {
    for i in 0..count {
        env.create(
            "/api/species",
            &common::specie(&format!("Species {}", i), &format!("Common {}", i)),
        )
        .await?;
    }
    Ok(())
}

#[tokio::test]
async fn test_empty_table_first_page() -> Result<()> {
    let env = common::spawn().await?;

    let (status, body) = env.get("/api/species?page=1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], serde_json::json!([]));
    assert_eq!(body["count"], 0);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 5);

    Ok(())
}

#[tokio::test]
async fn test_pages_are_capped_at_five_newest_first() -> Result<()> {
    let env = common::spawn().await?;
    seed_species(&env, 7).await?;

    let (_, first) = env.get("/api/species?page=1").await?;
    let rows = first["data"].as_array().expect("array");
    assert_eq!(rows.len(), 5);
    assert_eq!(first["count"], 5);
    assert_eq!(rows[0]["common_name"], "Common 6");

    let request = env.upstream.last_request().expect("list request");
    assert_eq!(request.param("order"), Some("created_at.desc"));
    assert_eq!(request.param("limit"), Some("5"));
    assert_eq!(request.param("offset"), Some("0"));

    let (_, second) = env.get("/api/species?page=2").await?;
    assert_eq!(second["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(second["count"], 2);
    assert_eq!(second["page"], 2);
    let request = env.upstream.last_request().expect("list request");
    assert_eq!(request.param("offset"), Some("5"));

    Ok(())
}

#[tokio::test]
async fn test_page_below_one_is_clamped() -> Result<()> {
    let env = common::spawn().await?;
    seed_species(&env, 2).await?;

    let (status, body) = env.get("/api/species?page=0").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    let request = env.upstream.last_request().expect("list request");
    assert_eq!(request.param("offset"), Some("0"));

    let (_, body) = env.get("/api/species?page=-3").await?;
    assert_eq!(body["page"], 1);

    Ok(())
}

#[tokio::test]
async fn test_unpaginated_list_has_no_page_fields() -> Result<()> {
    let env = common::spawn().await?;
    seed_species(&env, 6).await?;

    let (_, body) = env.get("/api/species").await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(6));
    assert!(body.get("page").is_none());
    assert!(body.get("pageSize").is_none());
    assert!(body.get("count").is_none());

    let request = env.upstream.last_request().expect("list request");
    assert!(request.param("limit").is_none());
    assert!(request.param("offset").is_none());

    Ok(())
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() -> Result<()> {
    let env = common::spawn().await?;
    env.create("/api/species", &common::jaguar()).await?;
    env.create("/api/species", &common::specie("Puma concolor", "Cougar")).await?;
    env.create("/api/species", &common::specie("Leopardus pardalis", "Ocelot")).await?;

    let (_, body) = env.get("/api/species?search=JAG").await?;
    let rows = body["data"].as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["scientific_name"], "Panthera onca");

    let request = env.upstream.last_request().expect("search request");
    assert_eq!(request.param("common_name"), Some("ilike.*JAG*"));

    Ok(())
}

#[tokio::test]
async fn test_blank_search_equals_unfiltered_list() -> Result<()> {
    let env = common::spawn().await?;
    seed_species(&env, 3).await?;

    let (_, unfiltered) = env.get("/api/species?page=1").await?;
    let (_, blank) = env.get("/api/species?page=1&search=").await?;
    assert_eq!(unfiltered["data"], blank["data"]);

    let request = env.upstream.last_request().expect("list request");
    assert!(request.param("common_name").is_none());

    Ok(())
}
