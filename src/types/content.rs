//! Request payloads and resolved drafts for the content collections.
//!
//! Payloads carry `Option` everywhere: an absent field means "not provided".
//! Resolution against defaults (create) or an existing row (update) lives in
//! `service::content`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedItemInput {
    pub name: Option<String>,
    pub group_label: Option<String>,
    pub badge_text: Option<String>,
    pub badge_style: Option<String>,
    pub card_style: Option<String>,
    pub border_style: Option<String>,
    pub button_style: Option<String>,
    pub external_link: Option<String>,
    pub image_ref: Option<String>,
    pub active: Option<bool>,
}

/// PUT body: the target id plus the fields to change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeaturedItemUpdate {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: FeaturedItemInput,
}

/// Fully resolved column values for a new featured item.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedItemDraft {
    pub name: String,
    pub group_label: String,
    pub badge_text: String,
    pub badge_style: String,
    pub card_style: String,
    pub border_style: String,
    pub button_style: String,
    pub external_link: Option<String>,
    pub image_ref: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialInput {
    pub name: Option<String>,
    pub location: Option<String>,
    pub avatar_symbol: Option<String>,
    pub rating: Option<i64>,
    pub text: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialUpdate {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: TestimonialInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialDraft {
    pub name: String,
    pub location: String,
    pub avatar_symbol: String,
    pub rating: i64,
    pub text: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfigInput {
    pub contact_number: Option<String>,
    pub profile_name: Option<String>,
    pub tagline: Option<String>,
    pub about_text: Option<String>,
    pub instagram_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub youtube_url: Option<String>,
    pub twitter_url: Option<String>,
    pub cover_image_ref: Option<String>,
    pub profile_image_ref: Option<String>,
    pub stat_years: Option<String>,
    pub stat_followers: Option<String>,
    pub stat_students: Option<String>,
    pub stat_years_label: Option<String>,
    pub stat_followers_label: Option<String>,
    pub stat_students_label: Option<String>,
}

/// Column values for the site-config singleton, minus id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfigDraft {
    pub contact_number: String,
    pub profile_name: String,
    pub tagline: String,
    pub about_text: Option<String>,
    pub instagram_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub youtube_url: Option<String>,
    pub twitter_url: Option<String>,
    pub cover_image_ref: Option<String>,
    pub profile_image_ref: Option<String>,
    pub stat_years: String,
    pub stat_followers: String,
    pub stat_students: String,
    pub stat_years_label: String,
    pub stat_followers_label: String,
    pub stat_students_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Toward the start of the list.
    Up,
    /// Toward the end of the list.
    Down,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MoveRequest {
    pub direction: MoveDirection,
}

/// `?id=` query parameter used by DELETE.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<i64>,
}
