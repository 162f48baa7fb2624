//! Schedule generation handler.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use tracing::warn;

use crate::schedule::{Generator, Schedule, SelectOptions, Term};
use crate::state::AppState;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulesParams {
    /// Comma-separated course codes, e.g. `CPSC 121,MATH 220`.
    pub courses: String,
    /// `"1"`, `"2"`, or `"1-2"` (the default).
    pub term: Option<String>,
    #[serde(default)]
    pub labs_and_tutorials: bool,
}

/// `GET /api/schedules?courses=CPSC 121,MATH 220&term=1-2&labsAndTutorials=true`
///
/// Responds with a JSON array of schedules; `[]` (never null) when no valid
/// schedule exists or every requested course was unknown.
pub(super) async fn schedules(
    State(state): State<AppState>,
    Query(params): Query<SchedulesParams>,
) -> Result<Json<Vec<Schedule>>, ApiError> {
    let courses: Vec<&str> = params
        .courses
        .split(',')
        .map(str::trim)
        .filter(|course| !course.is_empty())
        .collect();
    if courses.is_empty() {
        return Err(ApiError::bad_request("`courses` must name at least one course"));
    }

    let term = match params.term.as_deref() {
        None => Term::Full,
        Some(raw) => raw
            .parse::<Term>()
            .map_err(|invalid| ApiError::bad_request(invalid.to_string()))?,
    };
    let options = SelectOptions {
        term,
        labs_and_tutorials: params.labs_and_tutorials,
    };

    let catalog = state.catalog.read().await;
    let generation = Generator::new(&catalog).create(&courses, options);
    for diagnostic in &generation.diagnostics {
        warn!(
            section = %diagnostic.section,
            detail = %diagnostic.detail,
            "recovered from malformed catalog record"
        );
    }

    Ok(Json(generation.schedules))
}
