//! Field resolution for the content collections and the config singleton.
//!
//! Create: absent or empty fields take the defaults below.
//! Update: absent fields keep their stored value; empty style fields reset to
//! the default; empty optional references (`externalLink`, `imageRef`, the
//! nullable config fields) are cleared.

use crate::db::models::{FeaturedItem, SiteConfig, Testimonial};
use crate::error::SiteError;
use crate::types::content::{
    FeaturedItemDraft, FeaturedItemInput, SiteConfigDraft, SiteConfigInput, TestimonialDraft,
    TestimonialInput,
};

pub const DEFAULT_ITEM_NAME: &str = "New Item";
pub const DEFAULT_GROUP_LABEL: &str = "Group";
pub const DEFAULT_BADGE_TEXT: &str = "TOP";
pub const DEFAULT_BADGE_STYLE: &str = "bg-gradient-to-r from-amber-400 to-yellow-500";
pub const DEFAULT_CARD_STYLE: &str = "from-rose-50 to-pink-50";
pub const DEFAULT_BORDER_STYLE: &str = "border-rose-200";
pub const DEFAULT_BUTTON_STYLE: &str =
    "bg-gradient-to-r from-rose-400 to-pink-500 hover:from-rose-500 hover:to-pink-600";

pub const DEFAULT_AVATAR: &str = "🙂";
pub const DEFAULT_RATING: i64 = 5;
pub const RATING_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// `Some` only for a value with non-whitespace content.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn or_default(value: Option<String>, default: &str) -> String {
    non_empty(value).unwrap_or_else(|| default.to_string())
}

/// Absent: keep. Empty: reset to `default`. Otherwise: replace.
fn patch_style(slot: &mut String, value: Option<String>, default: &str) {
    if let Some(v) = value {
        *slot = if v.trim().is_empty() {
            default.to_string()
        } else {
            v
        };
    }
}

/// Absent: keep. Empty: clear. Otherwise: replace.
fn patch_optional(slot: &mut Option<String>, value: Option<String>) {
    if let Some(v) = value {
        *slot = non_empty(Some(v));
    }
}

/// Absent or empty: keep. Otherwise: replace.
fn patch_required(slot: &mut String, value: Option<String>) {
    if let Some(v) = non_empty(value) {
        *slot = v;
    }
}

fn check_rating(rating: i64) -> Result<i64, SiteError> {
    if RATING_RANGE.contains(&rating) {
        Ok(rating)
    } else {
        Err(SiteError::validation("rating must be between 1 and 5"))
    }
}

impl FeaturedItemInput {
    pub fn into_draft(self) -> FeaturedItemDraft {
        FeaturedItemDraft {
            name: or_default(self.name, DEFAULT_ITEM_NAME),
            group_label: or_default(self.group_label, DEFAULT_GROUP_LABEL),
            badge_text: or_default(self.badge_text, DEFAULT_BADGE_TEXT),
            badge_style: or_default(self.badge_style, DEFAULT_BADGE_STYLE),
            card_style: or_default(self.card_style, DEFAULT_CARD_STYLE),
            border_style: or_default(self.border_style, DEFAULT_BORDER_STYLE),
            button_style: or_default(self.button_style, DEFAULT_BUTTON_STYLE),
            external_link: non_empty(self.external_link),
            image_ref: non_empty(self.image_ref),
            active: self.active.unwrap_or(true),
        }
    }

    pub fn apply_to(self, item: &mut FeaturedItem) {
        patch_required(&mut item.name, self.name);
        patch_required(&mut item.group_label, self.group_label);
        patch_required(&mut item.badge_text, self.badge_text);
        patch_style(&mut item.badge_style, self.badge_style, DEFAULT_BADGE_STYLE);
        patch_style(&mut item.card_style, self.card_style, DEFAULT_CARD_STYLE);
        patch_style(&mut item.border_style, self.border_style, DEFAULT_BORDER_STYLE);
        patch_style(&mut item.button_style, self.button_style, DEFAULT_BUTTON_STYLE);
        patch_optional(&mut item.external_link, self.external_link);
        patch_optional(&mut item.image_ref, self.image_ref);
        if let Some(active) = self.active {
            item.active = active;
        }
    }
}

impl TestimonialInput {
    pub fn into_draft(self) -> Result<TestimonialDraft, SiteError> {
        let (Some(name), Some(text)) = (non_empty(self.name), non_empty(self.text)) else {
            return Err(SiteError::validation("name and text are required"));
        };
        Ok(TestimonialDraft {
            name,
            location: self.location.unwrap_or_default(),
            avatar_symbol: or_default(self.avatar_symbol, DEFAULT_AVATAR),
            rating: check_rating(self.rating.unwrap_or(DEFAULT_RATING))?,
            text,
            active: self.active.unwrap_or(true),
        })
    }

    pub fn apply_to(self, item: &mut Testimonial) -> Result<(), SiteError> {
        if let Some(rating) = self.rating {
            item.rating = check_rating(rating)?;
        }
        patch_required(&mut item.name, self.name);
        if let Some(location) = self.location {
            item.location = location;
        }
        patch_style(&mut item.avatar_symbol, self.avatar_symbol, DEFAULT_AVATAR);
        patch_required(&mut item.text, self.text);
        if let Some(active) = self.active {
            item.active = active;
        }
        Ok(())
    }
}

impl Default for SiteConfigDraft {
    fn default() -> Self {
        Self {
            contact_number: "5511999999999".to_string(),
            profile_name: "Site Owner".to_string(),
            tagline: "Welcome to my corner of the internet ✨".to_string(),
            about_text: Some(
                "Hi! For the past few years I have been sharing tips, picks and honest \
                 recommendations with a growing community."
                    .to_string(),
            ),
            instagram_url: None,
            tiktok_url: None,
            youtube_url: None,
            twitter_url: None,
            cover_image_ref: None,
            profile_image_ref: None,
            stat_years: "3+".to_string(),
            stat_followers: "5K+".to_string(),
            stat_students: "500+".to_string(),
            stat_years_label: "Years of experience".to_string(),
            stat_followers_label: "Followers".to_string(),
            stat_students_label: "Happy members".to_string(),
        }
    }
}

impl SiteConfigInput {
    /// Defaults overlaid by every non-empty provided field.
    pub fn into_draft(self) -> SiteConfigDraft {
        let d = SiteConfigDraft::default();
        SiteConfigDraft {
            contact_number: or_default(self.contact_number, &d.contact_number),
            profile_name: or_default(self.profile_name, &d.profile_name),
            tagline: or_default(self.tagline, &d.tagline),
            about_text: non_empty(self.about_text).or(d.about_text),
            instagram_url: non_empty(self.instagram_url),
            tiktok_url: non_empty(self.tiktok_url),
            youtube_url: non_empty(self.youtube_url),
            twitter_url: non_empty(self.twitter_url),
            cover_image_ref: non_empty(self.cover_image_ref),
            profile_image_ref: non_empty(self.profile_image_ref),
            stat_years: or_default(self.stat_years, &d.stat_years),
            stat_followers: or_default(self.stat_followers, &d.stat_followers),
            stat_students: or_default(self.stat_students, &d.stat_students),
            stat_years_label: or_default(self.stat_years_label, &d.stat_years_label),
            stat_followers_label: or_default(self.stat_followers_label, &d.stat_followers_label),
            stat_students_label: or_default(self.stat_students_label, &d.stat_students_label),
        }
    }

    /// Provided fields replace stored ones; absent fields are untouched.
    pub fn apply_to(self, config: &mut SiteConfig) {
        let set = |slot: &mut String, value: Option<String>| {
            if let Some(v) = value {
                *slot = v;
            }
        };
        set(&mut config.contact_number, self.contact_number);
        set(&mut config.profile_name, self.profile_name);
        set(&mut config.tagline, self.tagline);
        patch_optional(&mut config.about_text, self.about_text);
        patch_optional(&mut config.instagram_url, self.instagram_url);
        patch_optional(&mut config.tiktok_url, self.tiktok_url);
        patch_optional(&mut config.youtube_url, self.youtube_url);
        patch_optional(&mut config.twitter_url, self.twitter_url);
        patch_optional(&mut config.cover_image_ref, self.cover_image_ref);
        patch_optional(&mut config.profile_image_ref, self.profile_image_ref);
        set(&mut config.stat_years, self.stat_years);
        set(&mut config.stat_followers, self.stat_followers);
        set(&mut config.stat_students, self.stat_students);
        set(&mut config.stat_years_label, self.stat_years_label);
        set(&mut config.stat_followers_label, self.stat_followers_label);
        set(&mut config.stat_students_label, self.stat_students_label);
    }
}
