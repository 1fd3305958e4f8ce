use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use shared_types::{AppError, Credentials, CurrentUserResponse, LoginResponse};

use crate::auth::bearer_token;
use crate::store::OfficeStore;

fn token_from(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
}

// ---------------------------------------------------------------------------
// POST /api/v1/auth/login
// ---------------------------------------------------------------------------

/// Rejected credentials still answer 200 with `success: false`.
#[tracing::instrument(skip(store, credentials), fields(email = %credentials.email))]
pub async fn login(
    State(store): State<Arc<OfficeStore>>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginResponse>, AppError> {
    Ok(Json(store.login(&credentials)?))
}

// ---------------------------------------------------------------------------
// POST /api/v1/auth/logout
// ---------------------------------------------------------------------------

#[tracing::instrument(skip_all)]
pub async fn logout(State(store): State<Arc<OfficeStore>>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = token_from(&headers) {
        store.logout(token);
    }
    StatusCode::NO_CONTENT
}

// ---------------------------------------------------------------------------
// GET /api/v1/auth/me
// ---------------------------------------------------------------------------

#[tracing::instrument(skip_all)]
pub async fn me(
    State(store): State<Arc<OfficeStore>>,
    headers: HeaderMap,
) -> Result<Json<CurrentUserResponse>, AppError> {
    let token = token_from(&headers).ok_or_else(|| AppError::unauthorized("رمز الدخول مطلوب"))?;
    let user = store.current_user(token)?;
    Ok(Json(CurrentUserResponse {
        success: true,
        data: Some(user),
    }))
}
