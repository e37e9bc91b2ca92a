use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

/// Process-wide configuration, resolved once on first access.
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| panic!("FATAL: invalid configuration: {e}"))
});

pub const SESSION_COOKIE: &str = "admin_session";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
    /// Directory uploaded images are written to.
    pub upload_dir: PathBuf,
    /// Public URL prefix the upload directory is served under.
    pub upload_url_prefix: String,
    pub max_upload_bytes: usize,
    pub session_ttl_hours: i64,
    /// Drop the `Secure` attribute from the session cookie (local http only).
    pub insecure_cookie: bool,
    /// Key material for the private cookie jar; at least 32 bytes.
    /// When unset a random key is generated per process.
    pub cookie_secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:site.db".to_string(),
            loglevel: "info".to_string(),
            upload_dir: PathBuf::from("public/uploads"),
            upload_url_prefix: "/uploads".to_string(),
            max_upload_bytes: 5 * 1024 * 1024,
            session_ttl_hours: 24,
            insecure_cookie: false,
            cookie_secret: None,
        }
    }
}

impl Config {
    /// Defaults, then `SITE_*` variables, then a raw `DATABASE_URL`.
    pub fn load() -> Result<Self, figment::Error> {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("SITE_"))
            .merge(Env::raw().only(&["DATABASE_URL"]))
            .extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the router cannot be built with.
    pub fn validate(&self) -> Result<(), figment::Error> {
        let prefix = self.upload_url_prefix.trim_end_matches('/');
        if !prefix.starts_with('/') || prefix.contains(['{', '}', '*']) {
            return Err(figment::Error::from(format!(
                "upload_url_prefix must be a non-root absolute path such as /uploads, got {:?}",
                self.upload_url_prefix
            )));
        }
        if self.max_upload_bytes == 0 {
            return Err(figment::Error::from(
                "max_upload_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_ttl_hours.max(1))
    }

    /// Request body ceiling for the upload route. Leaves room for multipart
    /// framing so an oversized file still reaches the size check.
    pub fn upload_body_limit(&self) -> usize {
        self.max_upload_bytes.saturating_mul(2).max(1024 * 1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_prefix(prefix: &str) -> Config {
        Config {
            upload_url_prefix: prefix.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
        assert!(with_prefix("/media/").validate().is_ok());
        assert!(with_prefix("/static/uploads").validate().is_ok());
    }

    #[test]
    fn unusable_upload_prefixes_are_rejected() {
        for prefix in ["", "/", "//", "uploads", "/{file}", "/files/*rest"] {
            assert!(with_prefix(prefix).validate().is_err(), "{prefix:?}");
        }
    }

    #[test]
    fn zero_upload_limit_is_rejected() {
        let cfg = Config {
            max_upload_bytes: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }
}
