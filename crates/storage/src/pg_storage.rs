//! PostgreSQL storage backend using sqlx.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use snipbin_core::{
    Message, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
    Thread,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::migrations::run_pg_migrations;
use crate::traits::ThreadStore;

const THREAD_COLUMNS: &str = "id, slug, locked, created_at";
const MESSAGE_COLUMNS: &str = "id, thread_id, content, language, is_code, created_at";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect with bounded pool options and run migrations.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

fn row_to_thread(row: &sqlx::postgres::PgRow) -> Result<Thread, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Thread {
        id: row.try_get("id")?,
        slug: row.try_get("slug")?,
        locked: row.try_get("locked")?,
        created_at,
    })
}

fn row_to_message(row: &sqlx::postgres::PgRow) -> Result<Message, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Message {
        id: row.try_get("id")?,
        thread_id: row.try_get("thread_id")?,
        content: row.try_get("content")?,
        language: row.try_get("language")?,
        is_code: row.try_get("is_code")?,
        created_at,
    })
}

#[async_trait]
impl ThreadStore for PgStorage {
    async fn create_thread(
        &self,
        slug: &str,
        content: &str,
        language: &str,
    ) -> Result<Thread, StorageError> {
        // One transaction for both inserts: a thread never becomes visible
        // without its first message.
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(&format!(
            "INSERT INTO threads (slug) VALUES ($1) RETURNING {THREAD_COLUMNS}"
        ))
        .bind(slug)
        .fetch_one(&mut *tx)
        .await?;
        let thread = row_to_thread(&row)?;

        sqlx::query(
            "INSERT INTO messages (thread_id, content, language, is_code)
             VALUES ($1, $2, $3, TRUE)",
        )
        .bind(thread.id)
        .bind(content)
        .bind(language)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(thread)
    }

    async fn get_thread_by_slug(&self, slug: &str) -> Result<Option<Thread>, StorageError> {
        let row = sqlx::query(&format!("SELECT {THREAD_COLUMNS} FROM threads WHERE slug = $1"))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_thread(&r)).transpose()
    }

    async fn get_messages(&self, thread_id: i32) -> Result<Vec<Message>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages
             WHERE thread_id = $1 ORDER BY created_at, id"
        ))
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_message).collect()
    }

    async fn create_message(
        &self,
        thread_id: i32,
        content: &str,
        language: &str,
    ) -> Result<Message, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO messages (thread_id, content, language, is_code)
             VALUES ($1, $2, $3, TRUE) RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(thread_id)
        .bind(content)
        .bind(language)
        .fetch_one(&self.pool)
        .await?;
        row_to_message(&row)
    }

    async fn lock_thread(&self, slug: &str) -> Result<Option<Thread>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE threads SET locked = TRUE WHERE slug = $1 RETURNING {THREAD_COLUMNS}"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_thread(&r)).transpose()
    }
}
