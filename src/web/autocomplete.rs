//! Course-name autocomplete handler.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AutocompleteParams {
    pub text: String,
}

/// `GET /api/autocomplete?text=cpsc`
pub(super) async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> Json<Vec<String>> {
    let completer = state.autocompleter.read().await;
    Json(completer.complete(params.text.trim()))
}
