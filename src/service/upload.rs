use crate::config::Config;
use crate::error::SiteError;
use chrono::Utc;
use rand::Rng;
use rand::distributions::Alphanumeric;
use std::path::{Path, PathBuf};
use tracing::info;

/// Declared MIME types accepted for upload. The body is not sniffed.
pub const ALLOWED_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/jpg", "image/webp"];

const FILENAME_PREFIX: &str = "upload";
const SUFFIX_LEN: usize = 6;

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub dir: PathBuf,
    pub url_prefix: String,
    pub max_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub filename: String,
    pub url: String,
    pub path: PathBuf,
}

impl UploadPolicy {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            dir: cfg.upload_dir.clone(),
            url_prefix: cfg.upload_url_prefix.trim_end_matches('/').to_string(),
            max_bytes: cfg.max_upload_bytes,
        }
    }

    /// Type first, then size.
    pub fn check(&self, content_type: &str, len: usize) -> Result<(), SiteError> {
        let mime = normalize_mime(content_type);
        if !ALLOWED_TYPES.contains(&mime.as_str()) {
            return Err(SiteError::UnsupportedType(mime));
        }
        if len > self.max_bytes {
            return Err(SiteError::TooLarge);
        }
        Ok(())
    }

    /// Validate and write `bytes` under a fresh name in the upload directory.
    pub async fn store(
        &self,
        original_name: Option<&str>,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredUpload, SiteError> {
        self.check(content_type, bytes.len())?;

        let ext = extension_for(original_name, &normalize_mime(content_type));
        let filename = generate_filename(&ext);
        let path = self.dir.join(&filename);

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, bytes).await?;

        info!(filename = %filename, size = bytes.len(), "upload stored");
        Ok(StoredUpload {
            url: format!("{}/{}", self.url_prefix, filename),
            filename,
            path,
        })
    }
}

fn normalize_mime(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// The original extension if it is plain alphanumeric, else one derived from the MIME type.
fn extension_for(original_name: Option<&str>, mime: &str) -> String {
    let from_name = original_name
        .and_then(|n| Path::new(n).extension())
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.len() <= 8 && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| e.to_ascii_lowercase());

    from_name.unwrap_or_else(|| {
        match mime {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            _ => "png",
        }
        .to_string()
    })
}

/// `upload-{unix_millis}-{6 lowercase alphanumerics}.{ext}`
fn generate_filename(ext: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!(
        "{FILENAME_PREFIX}-{}-{suffix}.{ext}",
        Utc::now().timestamp_millis()
    )
}
