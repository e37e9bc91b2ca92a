use crate::db::models::SiteConfig;
use crate::db::sqlite::SiteStorage;
use crate::error::SiteError;
use crate::types::content::SiteConfigDraft;
use chrono::Utc;

const SINGLETON_ID: i64 = 1;

const SELECT_CONFIG: &str = r#"SELECT id, contact_number, profile_name, tagline, about_text,
    instagram_url, tiktok_url, youtube_url, twitter_url, cover_image_ref, profile_image_ref,
    stat_years, stat_followers, stat_students,
    stat_years_label, stat_followers_label, stat_students_label, updated_at
    FROM site_config WHERE id = ?"#;

impl SiteStorage {
    pub async fn get_site_config(&self) -> Result<Option<SiteConfig>, SiteError> {
        let row = sqlx::query_as::<_, SiteConfig>(SELECT_CONFIG)
            .bind(SINGLETON_ID)
            .fetch_optional(self.pool())
            .await?;
        Ok(row)
    }

    /// Create the singleton from `draft` unless it already exists.
    /// Returns whether a row was inserted.
    pub async fn insert_site_config(&self, draft: &SiteConfigDraft) -> Result<bool, SiteError> {
        let res = sqlx::query(
            r#"
            INSERT INTO site_config (
                id, contact_number, profile_name, tagline, about_text,
                instagram_url, tiktok_url, youtube_url, twitter_url,
                cover_image_ref, profile_image_ref,
                stat_years, stat_followers, stat_students,
                stat_years_label, stat_followers_label, stat_students_label, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO NOTHING
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(&draft.contact_number)
        .bind(&draft.profile_name)
        .bind(&draft.tagline)
        .bind(&draft.about_text)
        .bind(&draft.instagram_url)
        .bind(&draft.tiktok_url)
        .bind(&draft.youtube_url)
        .bind(&draft.twitter_url)
        .bind(&draft.cover_image_ref)
        .bind(&draft.profile_image_ref)
        .bind(&draft.stat_years)
        .bind(&draft.stat_followers)
        .bind(&draft.stat_students)
        .bind(&draft.stat_years_label)
        .bind(&draft.stat_followers_label)
        .bind(&draft.stat_students_label)
        .bind(Utc::now())
        .execute(self.pool())
        .await?;
        Ok(res.rows_affected() > 0)
    }

    /// The singleton row, created from `defaults` first if it is missing.
    pub async fn get_or_create_site_config(
        &self,
        defaults: &SiteConfigDraft,
    ) -> Result<SiteConfig, SiteError> {
        if let Some(config) = self.get_site_config().await? {
            return Ok(config);
        }
        self.insert_site_config(defaults).await?;
        self.get_site_config()
            .await?
            .ok_or(SiteError::NotFound("Site config"))
    }

    /// Write every column of an existing singleton row.
    pub async fn save_site_config(&self, config: &SiteConfig) -> Result<SiteConfig, SiteError> {
        let res = sqlx::query(
            r#"UPDATE site_config SET
                contact_number = ?,
                profile_name = ?,
                tagline = ?,
                about_text = ?,
                instagram_url = ?,
                tiktok_url = ?,
                youtube_url = ?,
                twitter_url = ?,
                cover_image_ref = ?,
                profile_image_ref = ?,
                stat_years = ?,
                stat_followers = ?,
                stat_students = ?,
                stat_years_label = ?,
                stat_followers_label = ?,
                stat_students_label = ?,
                updated_at = ?
              WHERE id = ?"#,
        )
        .bind(&config.contact_number)
        .bind(&config.profile_name)
        .bind(&config.tagline)
        .bind(&config.about_text)
        .bind(&config.instagram_url)
        .bind(&config.tiktok_url)
        .bind(&config.youtube_url)
        .bind(&config.twitter_url)
        .bind(&config.cover_image_ref)
        .bind(&config.profile_image_ref)
        .bind(&config.stat_years)
        .bind(&config.stat_followers)
        .bind(&config.stat_students)
        .bind(&config.stat_years_label)
        .bind(&config.stat_followers_label)
        .bind(&config.stat_students_label)
        .bind(Utc::now())
        .bind(SINGLETON_ID)
        .execute(self.pool())
        .await?;

        if res.rows_affected() == 0 {
            return Err(SiteError::NotFound("Site config"));
        }
        self.get_site_config()
            .await?
            .ok_or(SiteError::NotFound("Site config"))
    }
}
