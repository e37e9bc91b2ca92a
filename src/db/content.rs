//! Per-kind inserts and updates for featured items and testimonials.

use crate::db::models::{FeaturedItem, OrderedRecord, Testimonial};
use crate::db::sqlite::SiteStorage;
use crate::error::SiteError;
use crate::types::content::{FeaturedItemDraft, TestimonialDraft};
use chrono::{DateTime, Utc};
use sqlx::{Sqlite, Transaction};

async fn next_position<T: OrderedRecord>(
    tx: &mut Transaction<'_, Sqlite>,
) -> Result<i64, SiteError> {
    let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
    let rec: (i64,) = sqlx::query_as(&sql).fetch_one(&mut **tx).await?;
    Ok(rec.0)
}

async fn fetch_in_tx<T: OrderedRecord>(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
) -> Result<Option<T>, SiteError> {
    let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
    let row = sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(row)
}

async fn insert_featured_tx(
    tx: &mut Transaction<'_, Sqlite>,
    draft: &FeaturedItemDraft,
    position: i64,
    now: DateTime<Utc>,
) -> Result<i64, SiteError> {
    let res = sqlx::query(
        r#"
        INSERT INTO platforms (
            name, group_label, badge_text, badge_style, card_style, border_style,
            button_style, external_link, image_ref, sort_order, active, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&draft.name)
    .bind(&draft.group_label)
    .bind(&draft.badge_text)
    .bind(&draft.badge_style)
    .bind(&draft.card_style)
    .bind(&draft.border_style)
    .bind(&draft.button_style)
    .bind(&draft.external_link)
    .bind(&draft.image_ref)
    .bind(position)
    .bind(draft.active)
    .bind(now)
    .bind(now)
    .execute(&mut **tx)
    .await?;
    Ok(res.last_insert_rowid())
}

async fn insert_testimonial_tx(
    tx: &mut Transaction<'_, Sqlite>,
    draft: &TestimonialDraft,
    position: i64,
    now: DateTime<Utc>,
) -> Result<i64, SiteError> {
    let res = sqlx::query(
        r#"
        INSERT INTO testimonials (
            name, location, avatar_symbol, rating, text, sort_order, active, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&draft.name)
    .bind(&draft.location)
    .bind(&draft.avatar_symbol)
    .bind(draft.rating)
    .bind(&draft.text)
    .bind(position)
    .bind(draft.active)
    .bind(now)
    .bind(now)
    .execute(&mut **tx)
    .await?;
    Ok(res.last_insert_rowid())
}

impl SiteStorage {
    /// Append a featured item at the end of the list.
    pub async fn insert_featured(
        &self,
        draft: &FeaturedItemDraft,
    ) -> Result<FeaturedItem, SiteError> {
        let mut tx = self.pool().begin().await?;
        let position = next_position::<FeaturedItem>(&mut tx).await?;
        let id = insert_featured_tx(&mut tx, draft, position, Utc::now()).await?;
        let row = fetch_in_tx::<FeaturedItem>(&mut tx, id)
            .await?
            .ok_or(SiteError::NotFound(FeaturedItem::LABEL))?;
        tx.commit().await?;
        Ok(row)
    }

    /// Load the row, let `apply` edit it, write every editable column back.
    /// `sort_order`, `id` and `created_at` are never written here.
    pub async fn update_featured_with<F>(
        &self,
        id: i64,
        apply: F,
    ) -> Result<FeaturedItem, SiteError>
    where
        F: FnOnce(&mut FeaturedItem) -> Result<(), SiteError> + Send,
    {
        let mut tx = self.pool().begin().await?;
        let mut item = fetch_in_tx::<FeaturedItem>(&mut tx, id)
            .await?
            .ok_or(SiteError::NotFound(FeaturedItem::LABEL))?;
        apply(&mut item)?;
        item.updated_at = Utc::now();

        sqlx::query(
            r#"UPDATE platforms SET
                name = ?,
                group_label = ?,
                badge_text = ?,
                badge_style = ?,
                card_style = ?,
                border_style = ?,
                button_style = ?,
                external_link = ?,
                image_ref = ?,
                active = ?,
                updated_at = ?
              WHERE id = ?"#,
        )
        .bind(&item.name)
        .bind(&item.group_label)
        .bind(&item.badge_text)
        .bind(&item.badge_style)
        .bind(&item.card_style)
        .bind(&item.border_style)
        .bind(&item.button_style)
        .bind(&item.external_link)
        .bind(&item.image_ref)
        .bind(item.active)
        .bind(item.updated_at)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(item)
    }

    pub async fn insert_testimonial(
        &self,
        draft: &TestimonialDraft,
    ) -> Result<Testimonial, SiteError> {
        let mut tx = self.pool().begin().await?;
        let position = next_position::<Testimonial>(&mut tx).await?;
        let id = insert_testimonial_tx(&mut tx, draft, position, Utc::now()).await?;
        let row = fetch_in_tx::<Testimonial>(&mut tx, id)
            .await?
            .ok_or(SiteError::NotFound(Testimonial::LABEL))?;
        tx.commit().await?;
        Ok(row)
    }

    pub async fn update_testimonial_with<F>(
        &self,
        id: i64,
        apply: F,
    ) -> Result<Testimonial, SiteError>
    where
        F: FnOnce(&mut Testimonial) -> Result<(), SiteError> + Send,
    {
        let mut tx = self.pool().begin().await?;
        let mut item = fetch_in_tx::<Testimonial>(&mut tx, id)
            .await?
            .ok_or(SiteError::NotFound(Testimonial::LABEL))?;
        apply(&mut item)?;
        item.updated_at = Utc::now();

        sqlx::query(
            r#"UPDATE testimonials SET
                name = ?,
                location = ?,
                avatar_symbol = ?,
                rating = ?,
                text = ?,
                active = ?,
                updated_at = ?
              WHERE id = ?"#,
        )
        .bind(&item.name)
        .bind(&item.location)
        .bind(&item.avatar_symbol)
        .bind(item.rating)
        .bind(&item.text)
        .bind(item.active)
        .bind(item.updated_at)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(item)
    }

    /// Insert `drafts` in order only if the table is empty. Returns whether it did.
    pub async fn seed_featured(&self, drafts: &[FeaturedItemDraft]) -> Result<bool, SiteError> {
        let mut tx = self.pool().begin().await?;
        if next_position::<FeaturedItem>(&mut tx).await? > 0 {
            return Ok(false);
        }
        let now = Utc::now();
        for (position, draft) in drafts.iter().enumerate() {
            insert_featured_tx(&mut tx, draft, position as i64, now).await?;
        }
        tx.commit().await?;
        Ok(true)
    }

    pub async fn seed_testimonials(&self, drafts: &[TestimonialDraft]) -> Result<bool, SiteError> {
        let mut tx = self.pool().begin().await?;
        if next_position::<Testimonial>(&mut tx).await? > 0 {
            return Ok(false);
        }
        let now = Utc::now();
        for (position, draft) in drafts.iter().enumerate() {
            insert_testimonial_tx(&mut tx, draft, position as i64, now).await?;
        }
        tx.commit().await?;
        Ok(true)
    }
}
