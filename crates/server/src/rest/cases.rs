use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use shared_types::{AppError, AttachFilesRequest, Collection, LegalCase, UpdateCaseStatusRequest};

use super::records::SearchParams;
use crate::store::OfficeStore;

// ---------------------------------------------------------------------------
// GET /api/v1/cases
// ---------------------------------------------------------------------------

#[tracing::instrument(skip(store))]
pub async fn list_cases(
    State(store): State<Arc<OfficeStore>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    Ok(Json(store.list_json(Collection::Cases, &params.q)?))
}

// ---------------------------------------------------------------------------
// GET /api/v1/cases/{id}
// ---------------------------------------------------------------------------

#[tracing::instrument(skip(store))]
pub async fn get_case(
    State(store): State<Arc<OfficeStore>>,
    Path(id): Path<String>,
) -> Result<Json<LegalCase>, AppError> {
    Ok(Json(store.case(&id)?))
}

// ---------------------------------------------------------------------------
// PATCH /api/v1/cases/{id}/status
// ---------------------------------------------------------------------------

/// Unknown status keys answer 422 with a `status` field error.
#[tracing::instrument(skip(store, body), fields(status = %body.status))]
pub async fn update_status(
    State(store): State<Arc<OfficeStore>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCaseStatusRequest>,
) -> Result<Json<LegalCase>, AppError> {
    Ok(Json(store.update_case_status(&id, &body.status)?))
}

// ---------------------------------------------------------------------------
// POST /api/v1/cases/{id}/attachments
// ---------------------------------------------------------------------------

#[tracing::instrument(skip(store, body), fields(count = body.files.len()))]
pub async fn attach_files(
    State(store): State<Arc<OfficeStore>>,
    Path(id): Path<String>,
    Json(body): Json<AttachFilesRequest>,
) -> Result<Json<LegalCase>, AppError> {
    Ok(Json(store.attach_files(&id, body.files)?))
}
