use crate::db::models::SiteConfig;
use crate::db::sqlite::SiteStorage;
use crate::error::SiteError;
use crate::types::content::{SiteConfigDraft, SiteConfigInput};
use tracing::info;

/// The config singleton, created with defaults on first read.
pub async fn load(storage: &SiteStorage) -> Result<SiteConfig, SiteError> {
    storage
        .get_or_create_site_config(&SiteConfigDraft::default())
        .await
}

/// Overlay `input` on the stored row, or seed a new row from defaults + `input`.
pub async fn update(
    storage: &SiteStorage,
    input: SiteConfigInput,
) -> Result<SiteConfig, SiteError> {
    if storage.get_site_config().await?.is_none() {
        let draft = input.clone().into_draft();
        if storage.insert_site_config(&draft).await? {
            info!("site config created from update");
            return storage
                .get_site_config()
                .await?
                .ok_or(SiteError::NotFound("Site config"));
        }
        // a concurrent first read created it; fall through to a plain update
    }

    let mut config = storage
        .get_site_config()
        .await?
        .ok_or(SiteError::NotFound("Site config"))?;
    input.apply_to(&mut config);
    storage.save_site_config(&config).await
}
