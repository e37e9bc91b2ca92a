use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::sqlite::SqliteRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Account fields safe to hand to a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountView {
    pub id: i64,
    pub username: String,
    pub name: String,
}

impl From<&Account> for AccountView {
    fn from(a: &Account) -> Self {
        Self {
            id: a.id,
            username: a.username.clone(),
            name: a.display_name.clone(),
        }
    }
}

/// A row kind that lives in an ordered collection table.
///
/// The table must carry `id`, `sort_order`, `active` and `updated_at`
/// columns; the generic list/reorder/toggle/delete queries rely on them.
pub trait OrderedRecord: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    const TABLE: &'static str;
    /// Human-readable name used in `NotFound` errors.
    const LABEL: &'static str;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedItem {
    pub id: i64,
    pub name: String,
    pub group_label: String,
    pub badge_text: String,
    pub badge_style: String,
    pub card_style: String,
    pub border_style: String,
    pub button_style: String,
    pub external_link: Option<String>,
    pub image_ref: Option<String>,
    #[sqlx(rename = "sort_order")]
    pub order: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderedRecord for FeaturedItem {
    const TABLE: &'static str = "platforms";
    const LABEL: &'static str = "Featured item";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub avatar_symbol: String,
    pub rating: i64,
    pub text: String,
    #[sqlx(rename = "sort_order")]
    pub order: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderedRecord for Testimonial {
    const TABLE: &'static str = "testimonials";
    const LABEL: &'static str = "Testimonial";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub id: i64,
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
    pub updated_at: DateTime<Utc>,
}

/// Row counts reported by the health probe and the seed operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentCounts {
    pub platforms: i64,
    pub testimonials: i64,
    pub config: i64,
}
