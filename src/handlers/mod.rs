pub mod auth;
pub mod content;
pub mod ordered;
pub mod site;
