use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use time::Duration;
use tracing::{info, warn};

use crate::config::SESSION_COOKIE;
use crate::db::models::AccountView;
use crate::error::SiteError;
use crate::middleware::ApiJson;
use crate::middleware::auth::session_token;
use crate::router::SiteState;
use crate::service::auth as accounts;
use crate::types::auth::{
    AccountResponse, LoginRequest, SessionStatus, SetupRequest, SetupStatus, SuccessResponse,
};

/// GET /api/admin/setup -> whether the administrator account exists.
pub async fn setup_status(State(state): State<SiteState>) -> Result<Json<SetupStatus>, SiteError> {
    let count = state.storage.count_accounts().await?;
    Ok(Json(SetupStatus {
        has_admin: count > 0,
    }))
}

/// POST /api/admin/setup -> create the one administrator account.
///
/// The body is decoded only after the existing-account check, so a second
/// setup is refused whatever it carries.
pub async fn setup(
    State(state): State<SiteState>,
    body: Result<Json<SetupRequest>, JsonRejection>,
) -> Result<Json<AccountResponse>, SiteError> {
    if state.storage.count_accounts().await? > 0 {
        return Err(SiteError::AlreadyInitialized);
    }
    let Json(req) = body?;
    let account = accounts::create_first_account(&state.storage, req).await?;
    Ok(Json(AccountResponse {
        success: true,
        user: AccountView::from(&account),
    }))
}

/// POST /api/admin/login -> verify credentials and set the session cookie.
pub async fn login(
    State(state): State<SiteState>,
    jar: PrivateCookieJar,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<(PrivateCookieJar, Json<AccountResponse>), SiteError> {
    let account = match accounts::authenticate(&state.storage, req).await {
        Ok(account) => account,
        Err(SiteError::InvalidCredentials) => {
            warn!("rejected login attempt");
            return Err(SiteError::InvalidCredentials);
        }
        Err(e) => return Err(e),
    };

    let (token, _session) = state.sessions.create(account.id).await?;
    let cookie = build_cookie(
        token,
        Duration::seconds(state.sessions.ttl().num_seconds()),
        !state.insecure_cookie,
    );

    info!(account_id = account.id, "administrator logged in");
    Ok((
        jar.add(cookie),
        Json(AccountResponse {
            success: true,
            user: AccountView::from(&account),
        }),
    ))
}

/// GET /api/admin/login -> report the current session without failing.
pub async fn session_status(
    State(state): State<SiteState>,
    jar: PrivateCookieJar,
) -> Json<SessionStatus> {
    let unauthenticated = Json(SessionStatus {
        authenticated: false,
        user: None,
    });

    let Some(token) = session_token(&jar) else {
        return unauthenticated;
    };
    let Some(session) = state.sessions.check(&token).await else {
        return unauthenticated;
    };
    match state.storage.get_account(session.account_id).await {
        Ok(Some(account)) => Json(SessionStatus {
            authenticated: true,
            user: Some(AccountView::from(&account)),
        }),
        Ok(None) => unauthenticated,
        Err(e) => {
            warn!(error = %e, "account lookup failed during session check");
            unauthenticated
        }
    }
}

/// POST /api/admin/logout -> drop the session and clear the cookie.
pub async fn logout(
    State(state): State<SiteState>,
    jar: PrivateCookieJar,
) -> (PrivateCookieJar, Json<SuccessResponse>) {
    // the cookie is cleared regardless; the entry expires on its own
    if let Some(token) = session_token(&jar)
        && let Err(e) = state.sessions.revoke(&token).await
    {
        warn!(error = %e, "failed to remove session on logout");
    }
    (jar.remove(clear_cookie()), Json(SuccessResponse::ok()))
}

fn build_cookie(value: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .build()
}

fn clear_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
