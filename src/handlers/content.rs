use axum::{Json, extract::State};
use tracing::info;

use crate::db::models::{FeaturedItem, Testimonial};
use crate::error::SiteError;
use crate::middleware::{AdminSession, ApiJson};
use crate::router::SiteState;
use crate::types::content::{
    FeaturedItemInput, FeaturedItemUpdate, TestimonialInput, TestimonialUpdate,
};

pub async fn create_platform(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ApiJson(input): ApiJson<FeaturedItemInput>,
) -> Result<Json<FeaturedItem>, SiteError> {
    let item = state.storage.insert_featured(&input.into_draft()).await?;
    info!(id = item.id, order = item.order, "featured item created");
    Ok(Json(item))
}

pub async fn update_platform(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ApiJson(req): ApiJson<FeaturedItemUpdate>,
) -> Result<Json<FeaturedItem>, SiteError> {
    let id = req.id.ok_or_else(|| SiteError::validation("id is required"))?;
    let fields = req.fields;
    let item = state
        .storage
        .update_featured_with(id, move |item| {
            fields.apply_to(item);
            Ok(())
        })
        .await?;
    Ok(Json(item))
}

pub async fn create_testimonial(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ApiJson(input): ApiJson<TestimonialInput>,
) -> Result<Json<Testimonial>, SiteError> {
    let draft = input.into_draft()?;
    let item = state.storage.insert_testimonial(&draft).await?;
    info!(id = item.id, order = item.order, "testimonial created");
    Ok(Json(item))
}

pub async fn update_testimonial(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ApiJson(req): ApiJson<TestimonialUpdate>,
) -> Result<Json<Testimonial>, SiteError> {
    let id = req.id.ok_or_else(|| SiteError::validation("id is required"))?;
    let fields = req.fields;
    let item = state
        .storage
        .update_testimonial_with(id, move |item| fields.apply_to(item))
        .await?;
    Ok(Json(item))
}
