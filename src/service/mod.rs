pub mod auth;
pub mod content;
pub mod seed;
pub mod session;
pub mod site_config;
pub mod upload;
