//! Blob endpoints
//!
//! Whole-object read and replace of the single file-backed binary resource.

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// GET /test/blob - Return the current blob bytes
///
/// The backing file is read fresh on every request; nothing is cached.
pub async fn get_blob(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let content = state.blob.read().await?;

    debug!(bytes = content.len(), "serving blob");

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        content,
    ))
}

/// PUT /test/blob - Replace the blob with the request body
///
/// Any non-empty byte body is accepted; an empty body is rejected without
/// touching the backing file.
pub async fn put_blob(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<&'static str>> {
    if body.is_empty() {
        return Err(AppError::BadRequest("empty request body".to_string()));
    }

    state.blob.write(&body).await?;

    debug!(bytes = body.len(), "blob replaced");

    Ok(Json("Ok."))
}
