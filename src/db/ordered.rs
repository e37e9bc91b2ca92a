//! Queries shared by every ordered collection (`platforms`, `testimonials`).
//!
//! Table names come from `OrderedRecord::TABLE`, a compile-time constant, so
//! the `format!`-built statements never carry caller input.

use crate::db::models::OrderedRecord;
use crate::db::sqlite::SiteStorage;
use crate::error::SiteError;
use crate::types::content::MoveDirection;
use chrono::Utc;
use tracing::debug;

impl SiteStorage {
    /// All rows in display order.
    pub async fn list_ordered<T: OrderedRecord>(&self) -> Result<Vec<T>, SiteError> {
        let sql = format!("SELECT * FROM {} ORDER BY sort_order ASC, id ASC", T::TABLE);
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(self.pool()).await?;
        Ok(rows)
    }

    /// Active rows in display order, for the public feed.
    pub async fn list_active<T: OrderedRecord>(&self) -> Result<Vec<T>, SiteError> {
        let sql = format!(
            "SELECT * FROM {} WHERE active = 1 ORDER BY sort_order ASC, id ASC",
            T::TABLE
        );
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(self.pool()).await?;
        Ok(rows)
    }

    pub async fn get_ordered<T: OrderedRecord>(&self, id: i64) -> Result<Option<T>, SiteError> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(row)
    }

    pub async fn count_ordered<T: OrderedRecord>(&self) -> Result<i64, SiteError> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
        let rec: (i64,) = sqlx::query_as(&sql).fetch_one(self.pool()).await?;
        Ok(rec.0)
    }

    /// Delete a row and close the gap it leaves, so positions stay `0..N-1`.
    pub async fn delete_ordered<T: OrderedRecord>(&self, id: i64) -> Result<(), SiteError> {
        let mut tx = self.pool().begin().await?;

        let select = format!("SELECT sort_order FROM {} WHERE id = ?", T::TABLE);
        let Some((position,)) = sqlx::query_as::<_, (i64,)>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Err(SiteError::NotFound(T::LABEL));
        };

        let delete = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        sqlx::query(&delete).bind(id).execute(&mut *tx).await?;

        let shift = format!(
            "UPDATE {} SET sort_order = sort_order - 1 WHERE sort_order > ?",
            T::TABLE
        );
        sqlx::query(&shift).bind(position).execute(&mut *tx).await?;

        tx.commit().await?;
        debug!(table = T::TABLE, id, position, "row deleted");
        Ok(())
    }

    /// Swap a row's position with its neighbour in `direction`.
    ///
    /// Moving the first row up or the last row down changes nothing. Both
    /// writes of the swap commit together. Returns the list afterwards.
    pub async fn move_ordered<T: OrderedRecord>(
        &self,
        id: i64,
        direction: MoveDirection,
    ) -> Result<Vec<T>, SiteError> {
        let mut tx = self.pool().begin().await?;

        let select = format!(
            "SELECT id, sort_order FROM {} ORDER BY sort_order ASC, id ASC",
            T::TABLE
        );
        let rows: Vec<(i64, i64)> = sqlx::query_as(&select).fetch_all(&mut *tx).await?;

        let current = rows
            .iter()
            .position(|(row_id, _)| *row_id == id)
            .ok_or(SiteError::NotFound(T::LABEL))?;
        let neighbour = match direction {
            MoveDirection::Up => current.checked_sub(1),
            MoveDirection::Down => Some(current + 1).filter(|i| *i < rows.len()),
        };

        if let Some(neighbour) = neighbour {
            let (a_id, a_order) = rows[current];
            let (b_id, b_order) = rows[neighbour];
            let now = Utc::now();
            let update = format!(
                "UPDATE {} SET sort_order = ?, updated_at = ? WHERE id = ?",
                T::TABLE
            );
            sqlx::query(&update)
                .bind(b_order)
                .bind(now)
                .bind(a_id)
                .execute(&mut *tx)
                .await?;
            sqlx::query(&update)
                .bind(a_order)
                .bind(now)
                .bind(b_id)
                .execute(&mut *tx)
                .await?;
            debug!(table = T::TABLE, moved = a_id, swapped_with = b_id, "rows swapped");
        }

        tx.commit().await?;
        self.list_ordered::<T>().await
    }

    /// Flip `active` and return the updated row.
    pub async fn toggle_active<T: OrderedRecord>(&self, id: i64) -> Result<T, SiteError> {
        let update = format!(
            "UPDATE {} SET active = NOT active, updated_at = ? WHERE id = ?",
            T::TABLE
        );
        let res = sqlx::query(&update)
            .bind(Utc::now())
            .bind(id)
            .execute(self.pool())
            .await?;
        if res.rows_affected() == 0 {
            return Err(SiteError::NotFound(T::LABEL));
        }
        self.get_ordered::<T>(id)
            .await?
            .ok_or(SiteError::NotFound(T::LABEL))
    }
}
