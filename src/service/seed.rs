use crate::db::models::ContentCounts;
use crate::db::sqlite::SiteStorage;
use crate::error::SiteError;
use crate::service::site_config;
use crate::types::content::{FeaturedItemDraft, TestimonialDraft};
use tracing::info;

struct Palette {
    badge: &'static str,
    card: &'static str,
    border: &'static str,
    button: &'static str,
}

const AMBER: Palette = Palette {
    badge: "bg-gradient-to-r from-amber-400 to-yellow-500",
    card: "from-amber-50 to-yellow-50",
    border: "border-amber-200",
    button: "bg-gradient-to-r from-amber-400 to-yellow-500 hover:from-amber-500 hover:to-yellow-600",
};
const PURPLE: Palette = Palette {
    badge: "bg-gradient-to-r from-purple-400 to-pink-500",
    card: "from-purple-50 to-pink-50",
    border: "border-purple-200",
    button: "bg-gradient-to-r from-purple-400 to-pink-500 hover:from-purple-500 hover:to-pink-600",
};
const RED: Palette = Palette {
    badge: "bg-gradient-to-r from-red-400 to-orange-500",
    card: "from-red-50 to-orange-50",
    border: "border-red-200",
    button: "bg-gradient-to-r from-red-400 to-orange-500 hover:from-red-500 hover:to-orange-600",
};
const EMERALD: Palette = Palette {
    badge: "bg-gradient-to-r from-emerald-400 to-teal-500",
    card: "from-emerald-50 to-teal-50",
    border: "border-emerald-200",
    button: "bg-gradient-to-r from-emerald-400 to-teal-500 hover:from-emerald-500 hover:to-teal-600",
};
const ROSE: Palette = Palette {
    badge: "bg-gradient-to-r from-rose-400 to-pink-500",
    card: "from-rose-50 to-pink-50",
    border: "border-rose-200",
    button: "bg-gradient-to-r from-rose-400 to-pink-500 hover:from-rose-500 hover:to-pink-600",
};

fn featured(name: &str, group: &str, badge: &str, palette: &Palette) -> FeaturedItemDraft {
    FeaturedItemDraft {
        name: name.to_string(),
        group_label: group.to_string(),
        badge_text: badge.to_string(),
        badge_style: palette.badge.to_string(),
        card_style: palette.card.to_string(),
        border_style: palette.border.to_string(),
        button_style: palette.button.to_string(),
        external_link: None,
        image_ref: None,
        active: true,
    }
}

fn testimonial(name: &str, location: &str, avatar: &str, text: &str) -> TestimonialDraft {
    TestimonialDraft {
        name: name.to_string(),
        location: location.to_string(),
        avatar_symbol: avatar.to_string(),
        rating: 5,
        text: text.to_string(),
        active: true,
    }
}

pub fn default_featured_items() -> Vec<FeaturedItemDraft> {
    vec![
        featured("Golden Hour", "Premium VIP Group", "TOP 1", &AMBER),
        featured("Stargazer", "Stellar Group", "PREMIUM", &PURPLE),
        featured("Red Comet", "Fast Lane Group", "FAST", &RED),
        featured("Evergreen", "Trusted Circle", "TRUSTED", &EMERALD),
        featured("Rose Garden", "Inner Circle", "EXCLUSIVE", &ROSE),
    ]
}

pub fn default_testimonials() -> Vec<TestimonialDraft> {
    vec![
        testimonial(
            "Maria S.",
            "São Paulo, SP",
            "👩‍🦰",
            "I started following the tips here and it changed how I plan my week. Always quick to answer questions!",
        ),
        testimonial(
            "Ana P.",
            "Rio de Janeiro, RJ",
            "👩‍🦱",
            "I was nervous to start, but everything was explained patiently. Great results so far, thank you!",
        ),
        testimonial(
            "Juliana C.",
            "Belo Horizonte, MG",
            "👱‍♀️",
            "The recommendations are reliable and I have already shared them with all my friends.",
        ),
    ]
}

/// Fill each empty kind with its defaults. Kinds that already have rows are left alone.
pub async fn seed_defaults(storage: &SiteStorage) -> Result<ContentCounts, SiteError> {
    let platforms = storage.seed_featured(&default_featured_items()).await?;
    let testimonials = storage.seed_testimonials(&default_testimonials()).await?;
    site_config::load(storage).await?;

    let counts = storage.content_counts().await?;
    info!(
        seeded_platforms = platforms,
        seeded_testimonials = testimonials,
        platforms = counts.platforms,
        testimonials = counts.testimonials,
        "seed finished"
    );
    Ok(counts)
}
