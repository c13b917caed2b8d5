//! Resource CRUD handlers, generic over the entity type: list, read, create, update, delete.

use crate::entity::{decode_record, IdAssignment, Resource};
use crate::error::AppError;
use crate::response::{created, ok};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Path ids must be positive integers.
pub(crate) fn parse_id<E: Resource>(id_str: &str) -> Result<i64, AppError> {
    match id_str.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidId { resource: E::LABEL }),
    }
}

/// Decode a full record. Keys match case-insensitively, unknown keys are ignored and
/// omitted keys take their zero value.
pub(crate) fn decode_body<E: Resource>(body: &[u8]) -> Result<E, AppError> {
    decode_record(body).map_err(|e| AppError::InvalidBody(e.to_string()))
}

pub async fn list<E: Resource>(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list::<E>(&state.pool).await?;
    Ok(ok(rows))
}

pub async fn read<E: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id::<E>(&id_str)?;
    let row = CrudService::read::<E>(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ok(row))
}

pub async fn create<E: Resource>(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let record = decode_body::<E>(&body)?;
    if E::ID_ASSIGNMENT == IdAssignment::Client && record.id() < 1 {
        return Err(AppError::InvalidBody(format!("{} ID must be a positive integer", E::LABEL)));
    }
    let row = CrudService::create(&state.pool, &record).await?;
    tracing::info!(resource = E::LABEL, id = row.id(), "created");
    Ok(created(row))
}

pub async fn update<E: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id::<E>(&id_str)?;
    let record = decode_body::<E>(&body)?;
    let row = CrudService::update(&state.pool, id, &record)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(resource = E::LABEL, id, "updated");
    Ok(ok(row))
}

pub async fn delete<E: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id::<E>(&id_str)?;
    if !CrudService::delete::<E>(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(resource = E::LABEL, id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}
