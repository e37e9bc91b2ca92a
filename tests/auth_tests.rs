mod common;

use axum::http::{Method, StatusCode};
use common::{ADMIN_PASSWORD, ADMIN_USER, spawn_app};
use serde_json::json;

#[tokio::test]
async fn setup_is_permitted_exactly_once() {
    let app = spawn_app().await;

    let status = app.get("/api/admin/setup", None).await;
    assert_eq!(status.body["hasAdmin"], json!(false));

    let first = app
        .post(
            "/api/admin/setup",
            None,
            json!({"username": "owner", "password": "secret1", "name": "Owner"}),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["success"], json!(true));
    assert_eq!(first.body["user"]["username"], json!("owner"));
    assert_eq!(first.body["user"]["name"], json!("Owner"));
    assert!(first.body["user"].get("password_hash").is_none());
    assert!(first.body["user"].get("passwordHash").is_none());

    let status = app.get("/api/admin/setup", None).await;
    assert_eq!(status.body["hasAdmin"], json!(true));

    // a valid payload and an empty one both hit the same wall
    for payload in [
        json!({"username": "other", "password": "secret2", "name": "Other"}),
        json!({}),
    ] {
        let again = app.post("/api/admin/setup", None, payload).await;
        assert_eq!(again.status, StatusCode::BAD_REQUEST);
        assert_eq!(again.error_code(), "ALREADY_INITIALIZED");
    }
    assert_eq!(app.storage.count_accounts().await.unwrap(), 1);
}

#[tokio::test]
async fn second_setup_is_refused_before_the_body_is_read() {
    let app = spawn_app().await;
    app.admin_cookie().await;

    let mistyped = app
        .post(
            "/api/admin/setup",
            None,
            json!({"username": 1, "password": true, "name": []}),
        )
        .await;
    assert_eq!(mistyped.status, StatusCode::BAD_REQUEST);
    assert_eq!(mistyped.error_code(), "ALREADY_INITIALIZED");

    let no_body = app.call(Method::POST, "/api/admin/setup", None, None).await;
    assert_eq!(no_body.status, StatusCode::BAD_REQUEST);
    assert_eq!(no_body.error_code(), "ALREADY_INITIALIZED");
}

#[tokio::test]
async fn malformed_setup_body_uses_the_error_envelope() {
    let app = spawn_app().await;

    let mistyped = app
        .post("/api/admin/setup", None, json!({"username": 1, "password": "secret1"}))
        .await;
    assert_eq!(mistyped.status, StatusCode::BAD_REQUEST);
    assert_eq!(mistyped.error_code(), "VALIDATION_ERROR");

    let no_body = app.call(Method::POST, "/api/admin/setup", None, None).await;
    assert_eq!(no_body.status, StatusCode::BAD_REQUEST);
    assert_eq!(no_body.error_code(), "VALIDATION_ERROR");
    assert_eq!(app.storage.count_accounts().await.unwrap(), 0);
}

#[tokio::test]
async fn whitespace_password_is_kept_verbatim() {
    let app = spawn_app().await;
    let spaces = "      ";

    let setup = app
        .post(
            "/api/admin/setup",
            None,
            json!({"username": "owner", "password": spaces, "name": "Owner"}),
        )
        .await;
    assert_eq!(setup.status, StatusCode::OK, "{}", setup.body);

    let login = app
        .post("/api/admin/login", None, json!({"username": "owner", "password": spaces}))
        .await;
    assert_eq!(login.status, StatusCode::OK);

    let trimmed = app
        .post("/api/admin/login", None, json!({"username": "owner", "password": "  "}))
        .await;
    assert_eq!(trimmed.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn setup_validates_payload() {
    let app = spawn_app().await;

    let missing = app
        .post("/api/admin/setup", None, json!({"username": "owner", "password": "secret1"}))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.error_code(), "VALIDATION_ERROR");

    let short = app
        .post(
            "/api/admin/setup",
            None,
            json!({"username": "owner", "password": "12345", "name": "Owner"}),
        )
        .await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);
    assert_eq!(short.error_code(), "VALIDATION_ERROR");

    assert_eq!(app.storage.count_accounts().await.unwrap(), 0);
}

#[tokio::test]
async fn login_sets_cookie_and_session_check_succeeds() {
    let app = spawn_app().await;
    let cookie = app.admin_cookie().await;

    let status = app.get("/api/admin/login", Some(&cookie)).await;
    assert_eq!(status.status, StatusCode::OK);
    assert_eq!(status.body["authenticated"], json!(true));
    assert_eq!(status.body["user"]["username"], json!(ADMIN_USER));
}

#[tokio::test]
async fn login_cookie_attributes() {
    let app = spawn_app().await;
    app.post(
        "/api/admin/setup",
        None,
        json!({"username": ADMIN_USER, "password": ADMIN_PASSWORD, "name": "Admin"}),
    )
    .await;

    let login = app
        .post(
            "/api/admin/login",
            None,
            json!({"username": ADMIN_USER, "password": ADMIN_PASSWORD}),
        )
        .await;
    let raw = login.raw_set_cookie().expect("no Set-Cookie header");
    assert!(raw.starts_with("admin_session="));
    assert!(raw.contains("HttpOnly"));
    assert!(raw.contains("SameSite=Lax"));
    assert!(raw.contains("Path=/"));
    assert!(raw.contains("Max-Age=86400"));
    // the test app runs with insecure_cookie
    assert!(!raw.contains("Secure"));
}

#[tokio::test]
async fn wrong_credentials_are_rejected() {
    let app = spawn_app().await;
    app.admin_cookie().await;

    let wrong_password = app
        .post(
            "/api/admin/login",
            None,
            json!({"username": ADMIN_USER, "password": "not-the-password"}),
        )
        .await;
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.error_code(), "INVALID_CREDENTIALS");
    assert!(wrong_password.session_cookie().is_none());

    let unknown_user = app
        .post(
            "/api/admin/login",
            None,
            json!({"username": "nobody", "password": ADMIN_PASSWORD}),
        )
        .await;
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.error_code(), "INVALID_CREDENTIALS");

    let missing = app
        .post("/api/admin/login", None, json!({"username": ADMIN_USER}))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn session_check_fails_closed() {
    let app = spawn_app().await;

    let none = app.get("/api/admin/login", None).await;
    assert_eq!(none.status, StatusCode::OK);
    assert_eq!(none.body["authenticated"], json!(false));

    let forged = app
        .get("/api/admin/login", Some("admin_session=forged-token"))
        .await;
    assert_eq!(forged.status, StatusCode::OK);
    assert_eq!(forged.body["authenticated"], json!(false));
}

#[tokio::test]
async fn admin_routes_require_a_session() {
    let app = spawn_app().await;
    app.admin_cookie().await;

    for (method, uri) in [
        ("GET", "/api/admin/platforms"),
        ("GET", "/api/admin/testimonials"),
        ("GET", "/api/admin/config"),
        ("POST", "/api/admin/seed"),
        ("DELETE", "/api/admin/platforms?id=999"),
        ("POST", "/api/admin/platforms/999/toggle"),
    ] {
        let resp = app
            .call(method.parse().unwrap(), uri, Some("admin_session=bogus"), None)
            .await;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(resp.error_code(), "UNAUTHORIZED", "{method} {uri}");
    }
}

#[tokio::test]
async fn logout_clears_cookie_and_session() {
    let app = spawn_app().await;
    let cookie = app.admin_cookie().await;

    let logout = app.post("/api/admin/logout", Some(&cookie), json!({})).await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.body["success"], json!(true));
    let cleared = logout.raw_set_cookie().expect("logout did not touch the cookie");
    assert!(cleared.starts_with("admin_session="));
    assert!(cleared.contains("Max-Age=0"));

    // replaying the old cookie no longer works
    let status = app.get("/api/admin/login", Some(&cookie)).await;
    assert_eq!(status.body["authenticated"], json!(false));
    let list = app.get("/api/admin/platforms", Some(&cookie)).await;
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);
}
