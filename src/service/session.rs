//! Session registry: opaque tokens mapped to an account and an expiry.
//!
//! Storage sits behind [`SessionStore`] so the lifetime policy is chosen by
//! whoever builds the router. [`MemorySessionStore`] keeps sessions in process
//! memory; they are lost on restart.

use crate::error::SiteError;
use async_trait::async_trait;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use rand::RngCore;
use rand::rngs::OsRng;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

const TOKEN_BYTES: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub account_id: i64,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, token: String, session: Session) -> Result<(), SiteError>;
    async fn get(&self, token: &str) -> Result<Option<Session>, SiteError>;
    async fn remove(&self, token: &str) -> Result<(), SiteError>;
}

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    /// Also drops every entry that has already expired, so tokens that are
    /// never presented again do not accumulate.
    async fn put(&self, token: String, session: Session) -> Result<(), SiteError> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock();
        sessions.retain(|_, s| !s.is_expired_at(now));
        sessions.insert(token, session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, SiteError> {
        Ok(self.sessions.lock().get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<(), SiteError> {
        self.sessions.lock().remove(token);
        Ok(())
    }
}

/// Issues, checks and revokes sessions against a [`SessionStore`].
#[derive(Clone)]
pub struct SessionRegistry {
    store: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(store: Arc<dyn SessionStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Registry over a fresh in-memory store.
    pub fn in_memory(ttl: Duration) -> Self {
        Self::new(Arc::new(MemorySessionStore::new()), ttl)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Register a new session for `account_id` and return its token.
    pub async fn create(&self, account_id: i64) -> Result<(String, Session), SiteError> {
        self.create_at(account_id, Utc::now()).await
    }

    pub async fn create_at(
        &self,
        account_id: i64,
        now: DateTime<Utc>,
    ) -> Result<(String, Session), SiteError> {
        let token = generate_token();
        let session = Session {
            account_id,
            expires_at: now + self.ttl,
        };
        self.store.put(token.clone(), session.clone()).await?;
        debug!(account_id, expires_at = %session.expires_at, "session created");
        Ok((token, session))
    }

    pub async fn check(&self, token: &str) -> Option<Session> {
        self.check_at(token, Utc::now()).await
    }

    /// Fails closed: unknown, expired and store errors all read as `None`.
    /// An expired entry is evicted on the way out.
    pub async fn check_at(&self, token: &str, now: DateTime<Utc>) -> Option<Session> {
        if token.is_empty() {
            return None;
        }
        let session = match self.store.get(token).await {
            Ok(found) => found?,
            Err(e) => {
                warn!(error = %e, "session lookup failed; treating as unauthenticated");
                return None;
            }
        };
        if session.is_expired_at(now) {
            if let Err(e) = self.store.remove(token).await {
                warn!(error = %e, "failed to evict expired session");
            }
            debug!(account_id = session.account_id, "session expired");
            return None;
        }
        Some(session)
    }

    pub async fn revoke(&self, token: &str) -> Result<(), SiteError> {
        self.store.remove(token).await
    }
}

/// 32 bytes from the OS RNG, base64url without padding.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
