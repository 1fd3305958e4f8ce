pub mod auth;
pub mod cases;
pub mod records;

use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::store::OfficeStore;

/// REST router over the process-wide store.
pub fn rest_router() -> Result<Router, shared_types::AppError> {
    Ok(rest_router_with(crate::store::office_store()?))
}

/// REST router over a given store. Tests pass a freshly seeded one.
pub fn rest_router_with(store: Arc<OfficeStore>) -> Router {
    api_router().with_state(store)
}

/// Route table. Case routes are listed before the generic collection
/// routes so the mutation endpoints sit next to their reads.
pub fn api_router() -> Router<Arc<OfficeStore>> {
    Router::new()
        .route("/health", get(crate::health::health_check))
        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))
        // Dashboard
        .route("/api/v1/dashboard", get(records::dashboard))
        // Cases
        .route("/api/v1/cases", get(cases::list_cases))
        .route("/api/v1/cases/{id}", get(cases::get_case))
        .route("/api/v1/cases/{id}/status", patch(cases::update_status))
        .route("/api/v1/cases/{id}/attachments", post(cases::attach_files))
        // Every other collection
        .route("/api/v1/{collection}", get(records::list_records))
        .route("/api/v1/{collection}/{id}", get(records::get_record))
}
