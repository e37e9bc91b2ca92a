//! Handlers shared by both ordered collections, instantiated per row kind in the router.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::info;

use crate::db::models::OrderedRecord;
use crate::error::SiteError;
use crate::middleware::{AdminSession, ApiJson, ApiPath, ApiQuery};
use crate::router::SiteState;
use crate::types::auth::SuccessResponse;
use crate::types::content::{IdQuery, MoveRequest};

pub async fn list_records<T>(
    _admin: AdminSession,
    State(state): State<SiteState>,
) -> Result<Json<Vec<T>>, SiteError>
where
    T: OrderedRecord + Serialize,
{
    Ok(Json(state.storage.list_ordered::<T>().await?))
}

/// DELETE ?id= -> remove the row and close the gap in the ordering.
pub async fn delete_record<T>(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> Result<Json<SuccessResponse>, SiteError>
where
    T: OrderedRecord,
{
    let id = query.id.ok_or_else(|| SiteError::validation("id is required"))?;
    state.storage.delete_ordered::<T>(id).await?;
    info!(table = T::TABLE, id, "record deleted");
    Ok(Json(SuccessResponse::ok()))
}

/// POST /{id}/move -> swap with the neighbour; the full list comes back.
pub async fn move_record<T>(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<MoveRequest>,
) -> Result<Json<Vec<T>>, SiteError>
where
    T: OrderedRecord + Serialize,
{
    let rows = state.storage.move_ordered::<T>(id, req.direction).await?;
    Ok(Json(rows))
}

/// POST /{id}/toggle -> flip visibility on the public site.
pub async fn toggle_record<T>(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<T>, SiteError>
where
    T: OrderedRecord + Serialize,
{
    Ok(Json(state.storage.toggle_active::<T>(id).await?))
}
