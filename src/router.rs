use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::warn;

use crate::config::Config;
use crate::db::models::{FeaturedItem, Testimonial};
use crate::db::sqlite::SiteStorage;
use crate::handlers::{auth, content, ordered, site};
use crate::service::session::SessionRegistry;
use crate::service::upload::UploadPolicy;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct SiteState {
    pub storage: SiteStorage,
    pub sessions: SessionRegistry,
    pub uploads: UploadPolicy,
    pub cookie_key: Key,
    pub insecure_cookie: bool,
    pub upload_body_limit: usize,
}

impl SiteState {
    /// Fails on settings `site_router` could not mount, such as a root upload prefix.
    pub fn new(
        storage: SiteStorage,
        sessions: SessionRegistry,
        cfg: &Config,
    ) -> Result<Self, figment::Error> {
        cfg.validate()?;
        Ok(Self {
            storage,
            sessions,
            uploads: UploadPolicy::from_config(cfg),
            cookie_key: cookie_key(cfg.cookie_secret.as_deref()),
            insecure_cookie: cfg.insecure_cookie,
            upload_body_limit: cfg.upload_body_limit(),
        })
    }
}

impl FromRef<SiteState> for Key {
    fn from_ref(state: &SiteState) -> Self {
        state.cookie_key.clone()
    }
}

/// Stretch the configured secret to the 64 bytes the cookie key needs,
/// or fall back to a random per-process key.
fn cookie_key(secret: Option<&str>) -> Key {
    match secret.filter(|s| !s.is_empty()) {
        Some(secret) => {
            if secret.len() < 32 {
                warn!("cookie_secret is shorter than 32 bytes");
            }
            Key::from(Sha512::digest(secret.as_bytes()).as_slice())
        }
        None => Key::generate(),
    }
}

pub fn site_router(state: SiteState) -> Router {
    let upload_limit = state.upload_body_limit;
    let upload_prefix = state.uploads.url_prefix.clone();
    let upload_dir = state.uploads.dir.clone();

    let admin = Router::new()
        .route("/setup", get(auth::setup_status).post(auth::setup))
        .route("/login", get(auth::session_status).post(auth::login))
        .route("/logout", post(auth::logout))
        .route(
            "/platforms",
            get(ordered::list_records::<FeaturedItem>)
                .post(content::create_platform)
                .put(content::update_platform)
                .delete(ordered::delete_record::<FeaturedItem>),
        )
        .route(
            "/platforms/{id}/move",
            post(ordered::move_record::<FeaturedItem>),
        )
        .route(
            "/platforms/{id}/toggle",
            post(ordered::toggle_record::<FeaturedItem>),
        )
        .route(
            "/testimonials",
            get(ordered::list_records::<Testimonial>)
                .post(content::create_testimonial)
                .put(content::update_testimonial)
                .delete(ordered::delete_record::<Testimonial>),
        )
        .route(
            "/testimonials/{id}/move",
            post(ordered::move_record::<Testimonial>),
        )
        .route(
            "/testimonials/{id}/toggle",
            post(ordered::toggle_record::<Testimonial>),
        )
        .route("/config", get(site::get_config).put(site::update_config))
        .route(
            "/upload",
            post(site::upload_image).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/seed", post(site::seed));

    Router::new()
        .nest("/api/admin", admin)
        .route("/api/health", get(site::health))
        .route("/api/site", get(site::public_site))
        .nest_service(&upload_prefix, ServeDir::new(upload_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
