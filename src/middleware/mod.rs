pub mod auth;
pub mod extract;

pub use auth::AdminSession;
pub use extract::{ApiJson, ApiPath, ApiQuery};
