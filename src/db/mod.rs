//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the pool handle, accounts and health queries
//! - `ordered.rs`: list/move/toggle/delete shared by the ordered collections
//! - `content.rs`: per-kind inserts and updates
//! - `site_config.rs`: the config singleton

pub mod content;
pub mod models;
pub mod ordered;
pub mod schema;
pub mod site_config;
pub mod sqlite;

pub use models::{Account, AccountView, FeaturedItem, OrderedRecord, SiteConfig, Testimonial};
pub use schema::SQLITE_INIT;
pub use sqlite::{SiteStorage, SqlitePool};
