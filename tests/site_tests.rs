mod common;

use axum::http::StatusCode;
use brand_site::SiteState;
use brand_site::service::session::SessionRegistry;
use common::spawn_app;
use serde_json::json;

#[tokio::test]
async fn seed_is_idempotent() {
    let app = spawn_app().await;
    let cookie = app.admin_cookie().await;

    let first = app.post("/api/admin/seed", Some(&cookie), json!({})).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["success"], json!(true));
    assert_eq!(first.body["platforms"], json!(5));
    assert_eq!(first.body["testimonials"], json!(3));
    assert_eq!(first.body["config"], json!(1));

    let second = app.post("/api/admin/seed", Some(&cookie), json!({})).await;
    assert_eq!(second.body["platforms"], first.body["platforms"]);
    assert_eq!(second.body["testimonials"], first.body["testimonials"]);
    assert_eq!(second.body["config"], first.body["config"]);

    let rows = app.platform_orders(&cookie).await;
    assert_eq!(
        rows.iter().map(|(_, o)| *o).collect::<Vec<_>>(),
        vec![0, 1, 2, 3, 4]
    );
}

#[tokio::test]
async fn seed_never_touches_a_populated_kind() {
    let app = spawn_app().await;
    let cookie = app.admin_cookie().await;
    app.create_platform(&cookie, "Mine").await;

    let seeded = app.post("/api/admin/seed", Some(&cookie), json!({})).await;
    assert_eq!(seeded.body["platforms"], json!(1));
    assert_eq!(seeded.body["testimonials"], json!(3));

    let rows = app.platform_orders(&cookie).await;
    assert_eq!(rows, vec![("Mine".to_string(), 0)]);
}

#[tokio::test]
async fn config_is_created_lazily_with_defaults() {
    let app = spawn_app().await;
    let cookie = app.admin_cookie().await;
    assert_eq!(app.storage.content_counts().await.unwrap().config, 0);

    let first = app.get("/api/admin/config", Some(&cookie)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["profileName"], json!("Site Owner"));
    assert_eq!(first.body["statYears"], json!("3+"));
    assert_eq!(first.body["instagramUrl"], json!(null));

    let again = app.get("/api/admin/config", Some(&cookie)).await;
    assert_eq!(again.body["id"], first.body["id"]);
    assert_eq!(app.storage.content_counts().await.unwrap().config, 1);
}

#[tokio::test]
async fn config_update_creates_from_defaults_when_missing() {
    let app = spawn_app().await;
    let cookie = app.admin_cookie().await;

    let created = app
        .put(
            "/api/admin/config",
            Some(&cookie),
            json!({"profileName": "Jo Rivera", "tagline": ""}),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["profileName"], json!("Jo Rivera"));
    // empty on create falls back to the default
    assert_eq!(created.body["tagline"], json!("Welcome to my corner of the internet ✨"));
    assert_eq!(app.storage.content_counts().await.unwrap().config, 1);
}

#[tokio::test]
async fn config_update_leaves_absent_fields_alone() {
    let app = spawn_app().await;
    let cookie = app.admin_cookie().await;
    app.get("/api/admin/config", Some(&cookie)).await;

    let updated = app
        .put(
            "/api/admin/config",
            Some(&cookie),
            json!({
                "contactNumber": "5521988887777",
                "instagramUrl": "https://instagram.com/jo",
                "profileImageRef": "/uploads/upload-1-abcdef.png"
            }),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["contactNumber"], json!("5521988887777"));
    assert_eq!(updated.body["instagramUrl"], json!("https://instagram.com/jo"));
    assert_eq!(updated.body["profileName"], json!("Site Owner"));

    let cleared = app
        .put("/api/admin/config", Some(&cookie), json!({"instagramUrl": ""}))
        .await;
    assert_eq!(cleared.body["instagramUrl"], json!(null));
    assert_eq!(cleared.body["contactNumber"], json!("5521988887777"));
    assert_eq!(
        cleared.body["profileImageRef"],
        json!("/uploads/upload-1-abcdef.png")
    );
    assert_eq!(app.storage.content_counts().await.unwrap().config, 1);
}

#[tokio::test]
async fn health_reports_connectivity_and_counts() {
    let app = spawn_app().await;
    let cookie = app.admin_cookie().await;
    app.create_platform(&cookie, "A").await;

    let health = app.get("/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], json!("ok"));
    assert_eq!(health.body["database"], json!("connected"));
    assert_eq!(health.body["data"]["platforms"], json!(1));
    assert_eq!(health.body["data"]["testimonials"], json!(0));
}

#[tokio::test]
async fn health_reports_an_unreachable_store() {
    let app = spawn_app().await;
    app.storage.pool().close().await;

    let health = app.get("/api/health", None).await;
    assert_eq!(health.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(health.error_code(), "STORE_UNAVAILABLE");
    let message = health.body["error"]["message"].as_str().unwrap_or_default();
    assert!(message.contains("DATABASE_URL"));
}

#[tokio::test]
async fn public_feed_hides_inactive_records() {
    let app = spawn_app().await;
    let cookie = app.admin_cookie().await;

    app.create_platform(&cookie, "Shown").await;
    let hidden = app.create_platform(&cookie, "Hidden").await;
    app.post(
        &format!("/api/admin/platforms/{}/toggle", hidden["id"]),
        Some(&cookie),
        json!({}),
    )
    .await;

    let site = app.get("/api/site", None).await;
    assert_eq!(site.status, StatusCode::OK);
    let platforms = site.body["platforms"].as_array().unwrap();
    assert_eq!(platforms.len(), 1);
    assert_eq!(platforms[0]["name"], json!("Shown"));
    assert_eq!(site.body["testimonials"], json!([]));
    assert_eq!(site.body["config"]["profileName"], json!("Site Owner"));

    // the admin listing still has both
    assert_eq!(app.platform_orders(&cookie).await.len(), 2);
}

#[tokio::test]
async fn unmountable_upload_prefix_is_refused() {
    let app = spawn_app().await;

    for prefix in ["/", "", "uploads"] {
        let mut config = app.config.clone();
        config.upload_url_prefix = prefix.to_string();
        let sessions = SessionRegistry::in_memory(config.session_ttl());
        let state = SiteState::new(app.storage.clone(), sessions, &config);
        assert!(state.is_err(), "{prefix:?}");
    }
}

#[tokio::test]
async fn malformed_config_update_uses_the_error_envelope() {
    let app = spawn_app().await;
    let cookie = app.admin_cookie().await;

    let resp = app
        .put("/api/admin/config", Some(&cookie), json!({"profileName": 42}))
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.error_code(), "VALIDATION_ERROR");
}
