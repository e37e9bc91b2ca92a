use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};

use crate::db::models::{FeaturedItem, SiteConfig, Testimonial};
use crate::error::SiteError;
use crate::middleware::{AdminSession, ApiJson};
use crate::router::SiteState;
use crate::service::{seed as seeding, site_config};
use crate::types::content::SiteConfigInput;
use crate::types::site::{HealthReport, PublicSite, SeedResponse, UploadResponse};

const UPLOAD_FIELD: &str = "file";

pub async fn get_config(
    _admin: AdminSession,
    State(state): State<SiteState>,
) -> Result<Json<SiteConfig>, SiteError> {
    Ok(Json(site_config::load(&state.storage).await?))
}

pub async fn update_config(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ApiJson(input): ApiJson<SiteConfigInput>,
) -> Result<Json<SiteConfig>, SiteError> {
    Ok(Json(site_config::update(&state.storage, input).await?))
}

/// POST /api/admin/upload -> multipart `file` field written under the upload dir.
pub async fn upload_image(
    _admin: AdminSession,
    State(state): State<SiteState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, SiteError> {
    let mut multipart = multipart?;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned).unwrap_or_default();
        // reject a bad type before buffering the body
        state.uploads.check(&content_type, 0)?;

        let bytes = field.bytes().await.map_err(multipart_error)?;
        let stored = state
            .uploads
            .store(file_name.as_deref(), &content_type, &bytes)
            .await?;
        return Ok(Json(UploadResponse {
            success: true,
            image_url: stored.url,
            filename: stored.filename,
        }));
    }
    Err(SiteError::validation("no file uploaded"))
}

fn multipart_error(e: MultipartError) -> SiteError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        SiteError::TooLarge
    } else {
        SiteError::Validation(e.body_text())
    }
}

pub async fn seed(
    _admin: AdminSession,
    State(state): State<SiteState>,
) -> Result<Json<SeedResponse>, SiteError> {
    let counts = seeding::seed_defaults(&state.storage).await?;
    Ok(Json(SeedResponse {
        success: true,
        message: "Default content is in place.".to_string(),
        counts,
    }))
}

/// GET /api/health -> store round-trip plus row counts.
pub async fn health(State(state): State<SiteState>) -> Result<Json<HealthReport>, SiteError> {
    let unavailable = |e: SiteError| SiteError::StoreUnavailable(e.to_string());
    state.storage.ping().await.map_err(unavailable)?;
    let data = state.storage.content_counts().await.map_err(unavailable)?;
    Ok(Json(HealthReport {
        status: "ok",
        database: "connected",
        data,
    }))
}

/// GET /api/site -> active content for the public pages.
pub async fn public_site(State(state): State<SiteState>) -> Result<Json<PublicSite>, SiteError> {
    let config = site_config::load(&state.storage).await?;
    let platforms = state.storage.list_active::<FeaturedItem>().await?;
    let testimonials = state.storage.list_active::<Testimonial>().await?;
    Ok(Json(PublicSite {
        config,
        platforms,
        testimonials,
    }))
}
