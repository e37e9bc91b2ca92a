#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
    response::Response,
};
use brand_site::config::Config;
use brand_site::db::SiteStorage;
use brand_site::service::session::SessionRegistry;
use brand_site::{SiteState, site_router};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "hunter22";

pub struct TestApp {
    pub app: Router,
    pub storage: SiteStorage,
    pub config: Config,
    // keeps the database and upload dir alive for the test
    pub dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let database_url = format!("sqlite:{}", dir.path().join("site.sqlite").display());
    let storage = SiteStorage::connect(&database_url)
        .await
        .expect("failed to open test database");

    let mut config = Config::default();
    config.upload_dir = dir.path().join("uploads");
    config.insecure_cookie = true;

    let sessions = SessionRegistry::in_memory(config.session_ttl());
    let state =
        SiteState::new(storage.clone(), sessions, &config).expect("invalid test config");

    TestApp {
        app: site_router(state),
        storage,
        config,
        dir,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// `name=value` from the first Set-Cookie header, ready to send back.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("admin_session="))
            .and_then(|v| v.split(';').next())
            .map(str::to_owned)
    }

    pub fn raw_set_cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    }

    pub fn error_code(&self) -> &str {
        self.body["error"]["code"].as_str().unwrap_or_default()
    }
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> Response {
        self.app.clone().oneshot(req).await.expect("request failed")
    }

    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let req = match body {
            Some(v) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        into_test_response(self.send(req).await).await
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.call(Method::GET, uri, cookie, None).await
    }

    pub async fn post(&self, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
        self.call(Method::POST, uri, cookie, Some(body)).await
    }

    pub async fn put(&self, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
        self.call(Method::PUT, uri, cookie, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.call(Method::DELETE, uri, cookie, None).await
    }

    /// Run setup and log in; returns the cookie to present on admin calls.
    pub async fn admin_cookie(&self) -> String {
        let setup = self
            .post(
                "/api/admin/setup",
                None,
                json!({"username": ADMIN_USER, "password": ADMIN_PASSWORD, "name": "Site Admin"}),
            )
            .await;
        assert_eq!(setup.status, StatusCode::OK, "setup failed: {}", setup.body);

        let login = self
            .post(
                "/api/admin/login",
                None,
                json!({"username": ADMIN_USER, "password": ADMIN_PASSWORD}),
            )
            .await;
        assert_eq!(login.status, StatusCode::OK, "login failed: {}", login.body);
        login.session_cookie().expect("login did not set a session cookie")
    }

    pub async fn create_platform(&self, cookie: &str, name: &str) -> Value {
        let resp = self
            .post("/api/admin/platforms", Some(cookie), json!({"name": name}))
            .await;
        assert_eq!(resp.status, StatusCode::OK, "create failed: {}", resp.body);
        resp.body
    }

    /// `(name, order)` pairs in listing order.
    pub async fn platform_orders(&self, cookie: &str) -> Vec<(String, i64)> {
        let list = self.get("/api/admin/platforms", Some(cookie)).await;
        assert_eq!(list.status, StatusCode::OK);
        list.body
            .as_array()
            .expect("list is not an array")
            .iter()
            .map(|p| {
                (
                    p["name"].as_str().unwrap_or_default().to_string(),
                    p["order"].as_i64().unwrap_or(-1),
                )
            })
            .collect()
    }
}

pub async fn into_test_response(resp: Response) -> TestResponse {
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    TestResponse {
        status,
        headers,
        body,
    }
}
