use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::PrivateCookieJar;

use crate::config::SESSION_COOKIE;
use crate::error::SiteError;
use crate::router::SiteState;
use crate::service::session::Session;

/// Read the session token from the encrypted cookie, if one decrypts.
pub fn session_token(jar: &PrivateCookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}

/// Extractor guarding every admin-only route.
///
/// Runs before the handler touches the store, so an unauthenticated caller
/// learns nothing about whether the target exists.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
    pub session: Session,
}

impl FromRequestParts<SiteState> for AdminSession {
    type Rejection = SiteError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SiteState,
    ) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::from_headers(&parts.headers, state.cookie_key.clone());
        let token = session_token(&jar).ok_or(SiteError::Unauthorized)?;
        let session = state
            .sessions
            .check(&token)
            .await
            .ok_or(SiteError::Unauthorized)?;
        Ok(Self { token, session })
    }
}
