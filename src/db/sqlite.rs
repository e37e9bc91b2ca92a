use crate::db::models::{Account, ContentCounts};
use crate::db::schema::SQLITE_INIT;
use crate::error::SiteError;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Handle over the site database. Cheap to clone; all clones share one pool.
#[derive(Clone)]
pub struct SiteStorage {
    pool: SqlitePool,
}

impl SiteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and apply the schema.
    pub async fn connect(database_url: &str) -> Result<Self, SiteError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), SiteError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn count_accounts(&self) -> Result<i64, SiteError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    /// Insert the account only while the table is empty.
    /// Returns `AlreadyInitialized` if another account got there first.
    pub async fn create_first_account(
        &self,
        username: &str,
        password_hash: &str,
        display_name: &str,
    ) -> Result<Account, SiteError> {
        let now = Utc::now();
        let res = sqlx::query(
            r#"
            INSERT INTO accounts (username, password_hash, display_name, created_at)
            SELECT ?, ?, ?, ?
            WHERE NOT EXISTS (SELECT 1 FROM accounts)
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(display_name)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            return Err(SiteError::AlreadyInitialized);
        }
        self.get_account(res.last_insert_rowid())
            .await?
            .ok_or(SiteError::NotFound("Account"))
    }

    pub async fn get_account(&self, id: i64) -> Result<Option<Account>, SiteError> {
        let row = sqlx::query_as::<_, Account>(
            "SELECT id, username, password_hash, display_name, created_at FROM accounts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn find_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, SiteError> {
        let row = sqlx::query_as::<_, Account>(
            "SELECT id, username, password_hash, display_name, created_at FROM accounts WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Connectivity probe: a trivial round-trip through the pool.
    pub async fn ping(&self) -> Result<(), SiteError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn content_counts(&self) -> Result<ContentCounts, SiteError> {
        let (platforms, testimonials, config): (i64, i64, i64) = sqlx::query_as(
            r#"SELECT
                (SELECT COUNT(*) FROM platforms),
                (SELECT COUNT(*) FROM testimonials),
                (SELECT COUNT(*) FROM site_config)"#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(ContentCounts {
            platforms,
            testimonials,
            config,
        })
    }
}
