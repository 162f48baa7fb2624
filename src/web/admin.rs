//! Admin handlers.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::state::AppState;
use crate::web::error::ApiError;

#[derive(Serialize)]
pub struct ReloadResponse {
    pub courses: usize,
}

/// `POST /api/admin/reload-catalog`
///
/// Replaces the in-memory catalog wholesale from the snapshot on disk and
/// rebuilds the autocompleter. In-flight requests keep reading the old
/// catalog until the swap.
pub(super) async fn reload_catalog(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let courses = state.reload_catalog().await?;
    Ok(Json(ReloadResponse { courses }))
}
