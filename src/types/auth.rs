use serde::{Deserialize, Serialize};

use crate::db::models::AccountView;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetupRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupStatus {
    pub has_admin: bool,
}

/// Body returned by setup and login.
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub success: bool,
    pub user: AccountView,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
