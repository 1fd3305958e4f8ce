use dioxus::prelude::*;
use shared_types::{
    AppConfig, AssistantArticle, CurrentUserResponse, Credentials, DashboardStats, FileUpload,
    LegalCase, LoginResponse,
};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::store::office_store;

#[cfg(feature = "server")]
fn parse_collection(key: &str) -> Result<shared_types::Collection, ServerFnError> {
    shared_types::Collection::parse(key).ok_or_else(|| {
        shared_types::AppError::not_found(format!("المجموعة {key} غير موجودة")).into_server_fn_error()
    })
}

/// Office config (feature flags, send delay). Not sensitive, no auth.
#[server]
pub async fn get_app_config() -> Result<AppConfig, ServerFnError> {
    Ok(crate::config::load_config().clone())
}

/// Sign in. Wrong credentials come back as `success: false`, not an error.
#[cfg_attr(feature = "server", tracing::instrument(skip(credentials), fields(email = %credentials.email)))]
#[server]
pub async fn login(credentials: Credentials) -> Result<LoginResponse, ServerFnError> {
    let store = office_store().map_err(|e| e.into_server_fn_error())?;
    store.login(&credentials).map_err(|e| e.into_server_fn_error())
}

/// Revoke a session token.
#[cfg_attr(feature = "server", tracing::instrument(skip(token)))]
#[server]
pub async fn logout(token: String) -> Result<(), ServerFnError> {
    let store = office_store().map_err(|e| e.into_server_fn_error())?;
    store.logout(&token);
    tracing::info!("session revoked");
    Ok(())
}

/// Resolve a stored token to the signed-in user.
#[cfg_attr(feature = "server", tracing::instrument(skip(token)))]
#[server]
pub async fn get_current_user(token: String) -> Result<CurrentUserResponse, ServerFnError> {
    let store = office_store().map_err(|e| e.into_server_fn_error())?;
    let user = store
        .current_user(&token)
        .map_err(|e| e.into_server_fn_error())?;
    Ok(CurrentUserResponse {
        success: true,
        data: Some(user),
    })
}

/// Records of a collection as JSON, filtered by a free-text query.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_records(
    collection: String,
    query: String,
) -> Result<serde_json::Value, ServerFnError> {
    let collection = parse_collection(&collection)?;
    let store = office_store().map_err(|e| e.into_server_fn_error())?;
    store
        .list_json(collection, &query)
        .map_err(|e| e.into_server_fn_error())
}

/// A single record as JSON.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_record(collection: String, id: String) -> Result<serde_json::Value, ServerFnError> {
    let collection = parse_collection(&collection)?;
    let store = office_store().map_err(|e| e.into_server_fn_error())?;
    store
        .get_json(collection, &id)
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_case_status(id: String, status: String) -> Result<LegalCase, ServerFnError> {
    let store = office_store().map_err(|e| e.into_server_fn_error())?;
    store
        .update_case_status(&id, &status)
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(files), fields(count = files.len())))]
#[server]
pub async fn attach_case_files(
    id: String,
    files: Vec<FileUpload>,
) -> Result<LegalCase, ServerFnError> {
    let store = office_store().map_err(|e| e.into_server_fn_error())?;
    store
        .attach_files(&id, files)
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn dashboard_stats() -> Result<DashboardStats, ServerFnError> {
    let store = office_store().map_err(|e| e.into_server_fn_error())?;
    Ok(store.dashboard(crate::store::today()))
}

/// Knowledge-base articles ranked against a question. Hidden when the
/// assistant page is switched off.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn ask_assistant(question: String) -> Result<Vec<AssistantArticle>, ServerFnError> {
    if !crate::config::feature_flags().legal_assistant {
        return Err(shared_types::AppError::not_found("المساعد القانوني غير مفعل").into_server_fn_error());
    }
    let store = office_store().map_err(|e| e.into_server_fn_error())?;
    Ok(store.ask(&question))
}
