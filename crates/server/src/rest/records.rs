use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use shared_types::{AppError, Collection, DashboardStats};

use crate::store::{today, OfficeStore};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub(crate) fn collection_from(key: &str) -> Result<Collection, AppError> {
    Collection::parse(key).ok_or_else(|| AppError::not_found(format!("المجموعة {key} غير موجودة")))
}

// ---------------------------------------------------------------------------
// GET /api/v1/{collection}?q=
// ---------------------------------------------------------------------------

#[tracing::instrument(skip(store))]
pub async fn list_records(
    State(store): State<Arc<OfficeStore>>,
    Path(collection): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let collection = collection_from(&collection)?;
    Ok(Json(store.list_json(collection, &params.q)?))
}

// ---------------------------------------------------------------------------
// GET /api/v1/{collection}/{id}
// ---------------------------------------------------------------------------

#[tracing::instrument(skip(store))]
pub async fn get_record(
    State(store): State<Arc<OfficeStore>>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let collection = collection_from(&collection)?;
    Ok(Json(store.get_json(collection, &id)?))
}

// ---------------------------------------------------------------------------
// GET /api/v1/dashboard
// ---------------------------------------------------------------------------

#[tracing::instrument(skip(store))]
pub async fn dashboard(State(store): State<Arc<OfficeStore>>) -> Json<DashboardStats> {
    Json(store.dashboard(today()))
}
