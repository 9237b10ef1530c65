//! Capital table endpoints
//!
//! Key-based CRUD over the in-memory country-to-capital mapping. The country
//! key is taken verbatim from the path segment; the table lower-cases it
//! before every lookup or mutation.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use bytes::Bytes;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// GET /test/capital/:country - Look up a capital city
///
/// Responds with a bare JSON string, e.g. `"Paris"`.
pub async fn get_capital(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> AppResult<Json<String>> {
    let capital = state.capitals.get(&country)?;
    Ok(Json(capital))
}

/// PUT /test/capital/:country - Set or overwrite a capital city
///
/// The body is decoded as UTF-8; beyond being non-empty and valid UTF-8
/// there is no further validation, no length limits.
pub async fn put_capital(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
    body: Bytes,
) -> AppResult<Json<&'static str>> {
    if body.is_empty() {
        return Err(AppError::BadRequest("empty request body".to_string()));
    }

    let capital = String::from_utf8(body.to_vec())
        .map_err(|_| AppError::BadRequest("request body is not valid UTF-8".to_string()))?;
    state.capitals.put(&country, capital);

    debug!(%country, "capital entry set");

    Ok(Json("Ok."))
}

/// DELETE /test/capital/:country - Remove a capital entry
pub async fn delete_capital(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> AppResult<Json<&'static str>> {
    state.capitals.remove(&country)?;

    debug!(%country, "capital entry removed");

    Ok(Json("Ok."))
}
