use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use snipbin_core::Message;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::CreateMessageRequest;

pub async fn create_message(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let message = state
        .thread_service
        .add_message(&slug, &req.content, req.language.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(message)))
}
