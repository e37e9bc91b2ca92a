use serde::Serialize;

use crate::db::models::{ContentCounts, FeaturedItem, SiteConfig, Testimonial};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub image_url: String,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedResponse {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub counts: ContentCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub database: &'static str,
    pub data: ContentCounts,
}

/// Everything the public pages need in one read.
#[derive(Debug, Clone, Serialize)]
pub struct PublicSite {
    pub config: SiteConfig,
    pub platforms: Vec<FeaturedItem>,
    pub testimonials: Vec<Testimonial>,
}
