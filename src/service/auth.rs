use crate::db::models::Account;
use crate::db::sqlite::SiteStorage;
use crate::error::SiteError;
use crate::types::auth::{LoginRequest, SetupRequest};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::info;

pub const MIN_PASSWORD_CHARS: usize = 6;

/// Lowercase hex SHA-256 of the plaintext.
///
/// Unsalted and single-pass, kept so existing account rows keep verifying.
pub fn hash_password(password: &str) -> String {
    Sha256::digest(password.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let computed = hash_password(password);
    bool::from(computed.as_bytes().ct_eq(stored_hash.as_bytes()))
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Passwords are taken verbatim; only an empty one counts as missing.
fn required_password(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// One-time creation of the administrator account.
pub async fn create_first_account(
    storage: &SiteStorage,
    req: SetupRequest,
) -> Result<Account, SiteError> {
    // a second setup fails the same way whatever it sends
    if storage.count_accounts().await? > 0 {
        return Err(SiteError::AlreadyInitialized);
    }

    let (Some(username), Some(password), Some(name)) = (
        required(req.username),
        required_password(req.password),
        required(req.name),
    ) else {
        return Err(SiteError::validation("username, password and name are required"));
    };
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(SiteError::validation(format!(
            "password must be at least {MIN_PASSWORD_CHARS} characters"
        )));
    }

    let account = storage
        .create_first_account(username.trim(), &hash_password(&password), name.trim())
        .await?;
    info!(account_id = account.id, username = %account.username, "administrator account created");
    Ok(account)
}

/// Resolve a username/password pair to its account.
pub async fn authenticate(storage: &SiteStorage, req: LoginRequest) -> Result<Account, SiteError> {
    let (Some(username), Some(password)) =
        (required(req.username), required_password(req.password))
    else {
        return Err(SiteError::validation("username and password are required"));
    };

    let Some(account) = storage.find_account_by_username(username.trim()).await? else {
        return Err(SiteError::InvalidCredentials);
    };
    if !verify_password(&password, &account.password_hash) {
        return Err(SiteError::InvalidCredentials);
    }
    Ok(account)
}
