//! PostgreSQL schema migrations for snipbin storage.

use sqlx::PgPool;

use crate::error::StorageError;

/// Run all PostgreSQL migrations. Idempotent; executed at startup.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS threads (
            id SERIAL PRIMARY KEY,
            slug TEXT NOT NULL UNIQUE,
            locked BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(e.to_string()))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id SERIAL PRIMARY KEY,
            thread_id INTEGER NOT NULL REFERENCES threads(id),
            content TEXT NOT NULL,
            language TEXT NOT NULL DEFAULT 'javascript',
            is_code BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(e.to_string()))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_messages_thread ON messages (thread_id)")
        .execute(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_messages_created ON messages (thread_id, created_at)",
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(e.to_string()))?;

    tracing::info!("PostgreSQL migrations completed");
    Ok(())
}
