//! Generic CRUD execution against PostgreSQL for any [`Resource`].

use crate::entity::{IdAssignment, Resource};
use crate::error::AppError;
use crate::sql::{self, SqlValue};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

pub struct CrudService;

impl CrudService {
    /// All rows ordered by id. An empty table yields an empty vec.
    pub async fn list<E: Resource>(pool: &PgPool) -> Result<Vec<E>, AppError> {
        let sql = sql::select_all(&E::TABLE);
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, E>(&sql)
            .fetch_all(pool)
            .await
            .map_err(|e| AppError::operation("list", E::LABEL, e))
    }

    /// Fetch one row by id.
    pub async fn read<E: Resource>(pool: &PgPool, id: i64) -> Result<Option<E>, AppError> {
        let sql = sql::select_by_id(&E::TABLE);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| AppError::operation("retrieve", E::LABEL, e))
    }

    /// Insert one row and return it as stored.
    pub async fn create<E: Resource>(pool: &PgPool, record: &E) -> Result<E, AppError> {
        let include_id = E::ID_ASSIGNMENT == IdAssignment::Client;
        let sql = sql::insert(&E::TABLE, include_id);
        tracing::debug!(sql = %sql, "query");
        let mut query = sqlx::query_as::<_, E>(&sql);
        if include_id {
            query = query.bind(record.id());
        }
        bind_values(query, record.values())
            .fetch_one(pool)
            .await
            .map_err(|source| AppError::CreateFailed {
                resource: E::LABEL,
                source,
            })
    }

    /// Replace every mutable column of row `id`. Returns None when the row does not exist.
    ///
    /// The existence check and the write share one transaction; the row stays locked in between.
    pub async fn update<E: Resource>(
        pool: &PgPool,
        id: i64,
        record: &E,
    ) -> Result<Option<E>, AppError> {
        let fail = |e| AppError::operation("update", E::LABEL, e);
        let mut tx = pool.begin().await.map_err(fail)?;
        if Self::lock_row::<E>(&mut tx, id).await?.is_none() {
            return Ok(None);
        }
        let sql = sql::update(&E::TABLE);
        tracing::debug!(sql = %sql, id, "query (tx)");
        let row = bind_values(sqlx::query_as::<_, E>(&sql), record.values())
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(fail)?;
        tx.commit().await.map_err(fail)?;
        Ok(Some(row))
    }

    /// Delete row `id`. Returns false when the row does not exist.
    pub async fn delete<E: Resource>(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let fail = |e| AppError::operation("delete", E::LABEL, e);
        let mut tx = pool.begin().await.map_err(fail)?;
        if Self::lock_row::<E>(&mut tx, id).await?.is_none() {
            return Ok(false);
        }
        let sql = sql::delete(&E::TABLE);
        tracing::debug!(sql = %sql, id, "query (tx)");
        sqlx::query(&sql)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(fail)?;
        tx.commit().await.map_err(fail)?;
        Ok(true)
    }

    async fn lock_row<E: Resource>(
        tx: &mut sqlx::PgConnection,
        id: i64,
    ) -> Result<Option<E>, AppError> {
        let sql = sql::select_by_id_for_update(&E::TABLE);
        tracing::debug!(sql = %sql, id, "query (tx)");
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::operation("retrieve", E::LABEL, e))
    }
}

fn bind_values<'q, E>(
    mut query: QueryAs<'q, Postgres, E, PgArguments>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Postgres, E, PgArguments>
where
    E: for<'r> sqlx::FromRow<'r, PgRow>,
{
    for value in values {
        query = query.bind(value);
    }
    query
}
