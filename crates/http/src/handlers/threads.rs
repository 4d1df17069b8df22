use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use snipbin_core::{CreatedThread, ThreadWithMessages};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{CreateThreadRequest, LockResponse};

pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateThreadRequest>,
) -> Result<(StatusCode, Json<CreatedThread>), ApiError> {
    let created = state
        .thread_service
        .create_thread(&req.initial_content, req.language.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<ThreadWithMessages>, ApiError> {
    let thread = state.thread_service.get_thread(&slug).await?;
    Ok(Json(thread))
}

pub async fn lock_thread(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<LockResponse>, ApiError> {
    let thread = state.thread_service.lock_thread(&slug).await?;
    Ok(Json(LockResponse { success: true, locked: thread.locked }))
}
