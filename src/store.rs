//! Database connector and resource table DDL.

use crate::config::Settings;
use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Tables backing the four resources. Column names match each resource's `TableDef`.
const RESOURCE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS "heroes" (
        "id" BIGSERIAL PRIMARY KEY,
        "name" TEXT NOT NULL,
        "universe" TEXT NOT NULL,
        "skill" TEXT NOT NULL,
        "image_url" TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "villain" (
        "id" BIGSERIAL PRIMARY KEY,
        "name" TEXT NOT NULL,
        "universe" TEXT NOT NULL,
        "image_url" TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "crimeevent" (
        "id" BIGSERIAL PRIMARY KEY,
        "hero_id" BIGINT NOT NULL,
        "villain_id" BIGINT NOT NULL,
        "description" TEXT NOT NULL,
        "date_time" TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "item" (
        "id" BIGINT PRIMARY KEY,
        "name" TEXT NOT NULL,
        "item_code" TEXT NOT NULL,
        "stock" INTEGER NOT NULL,
        "description" TEXT NOT NULL,
        "status" TEXT NOT NULL
    )
    "#,
];

/// Open the pool and prove the database answers. Connections are checked again on every acquire.
pub async fn connect(settings: &Settings) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .test_before_acquire(true)
        .connect(&settings.database_url)
        .await
        .map_err(AppError::Connection)?;
    ping(&pool).await?;
    tracing::info!(max_connections = settings.max_connections, "database pool ready");
    Ok(pool)
}

pub async fn ping(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(AppError::Connection)?;
    Ok(())
}

/// Create the resource tables if they do not exist. Existing tables are left untouched.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in RESOURCE_TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!(tables = RESOURCE_TABLES.len(), "resource tables ensured");
    Ok(())
}
