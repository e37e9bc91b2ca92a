//! SQL DDL for initializing the site database.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `accounts`: the single administrator; `username` UNIQUE
/// - `platforms` / `testimonials`: ordered collections, `sort_order` holds the display position
/// - `site_config`: singleton pinned to `id = 1` by a CHECK constraint
/// - booleans stored as INTEGER 0/1, timestamps as RFC3339 text
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    display_name TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS platforms (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    group_label TEXT NOT NULL,
    badge_text TEXT NOT NULL,
    badge_style TEXT NOT NULL,
    card_style TEXT NOT NULL,
    border_style TEXT NOT NULL,
    button_style TEXT NOT NULL,
    external_link TEXT NULL,
    image_ref TEXT NULL,
    sort_order INTEGER NOT NULL,
    active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_platforms_sort_order ON platforms(sort_order);

CREATE TABLE IF NOT EXISTS testimonials (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    location TEXT NOT NULL,
    avatar_symbol TEXT NOT NULL,
    rating INTEGER NOT NULL,
    text TEXT NOT NULL,
    sort_order INTEGER NOT NULL,
    active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_testimonials_sort_order ON testimonials(sort_order);

CREATE TABLE IF NOT EXISTS site_config (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    contact_number TEXT NOT NULL,
    profile_name TEXT NOT NULL,
    tagline TEXT NOT NULL,
    about_text TEXT NULL,
    instagram_url TEXT NULL,
    tiktok_url TEXT NULL,
    youtube_url TEXT NULL,
    twitter_url TEXT NULL,
    cover_image_ref TEXT NULL,
    profile_image_ref TEXT NULL,
    stat_years TEXT NOT NULL,
    stat_followers TEXT NOT NULL,
    stat_students TEXT NOT NULL,
    stat_years_label TEXT NOT NULL,
    stat_followers_label TEXT NOT NULL,
    stat_students_label TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
"#;
