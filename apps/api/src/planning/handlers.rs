//! Axum route handlers for the Plan API.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::planning::assembler::StudyPlan;
use crate::planning::templates::SubjectSummary;
use crate::planning::timeframe::Timeframe;
use crate::state::AppState;

/// Timeframe assumed by `GET /api/plan` when the query omits one.
pub const DEFAULT_QUERY_TIMEFRAME: &str = "7 days";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    pub subject: Option<String>,
    pub level: Option<String>,
    pub timeframe: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub subject: Option<String>,
    pub level: Option<String>,
    /// String or number; absent or any other JSON value means the level default.
    pub timeframe: Option<Timeframe>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/plan?subject=&level=&timeframe=
pub async fn handle_get_plan(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
) -> Result<Json<StudyPlan>, AppError> {
    let (subject, level) = require_subject_and_level(query.subject, query.level)?;

    let timeframe = query
        .timeframe
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_QUERY_TIMEFRAME.to_string());

    let plan = state
        .assembler
        .build_study_plan(&subject, &level, Some(&Timeframe::Text(timeframe)))
        .await?;

    Ok(Json(plan))
}

/// POST /api/plan
pub async fn handle_create_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<StudyPlan>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let (subject, level) = require_subject_and_level(request.subject, request.level)?;

    let plan = state
        .assembler
        .build_study_plan(&subject, &level, request.timeframe.as_ref())
        .await?;

    Ok(Json(plan))
}

/// GET /api/subjects
pub async fn handle_list_subjects(State(state): State<AppState>) -> Json<Vec<SubjectSummary>> {
    Json(state.assembler.catalog().subjects())
}

/// Blank values count as missing; present values are passed through unchanged.
fn require_subject_and_level(
    subject: Option<String>,
    level: Option<String>,
) -> Result<(String, String), AppError> {
    let subject = subject.unwrap_or_default();
    let level = level.unwrap_or_default();

    if subject.trim().is_empty() || level.trim().is_empty() {
        return Err(AppError::Validation(
            "Subject and level are required parameters".to_string(),
        ));
    }

    Ok((subject, level))
}
