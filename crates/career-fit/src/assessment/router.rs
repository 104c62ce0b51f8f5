use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use tracing::{info, warn};

use super::responses::{ResponseSet, SubmissionBatch};
use super::scoring::ScoringEngine;
use super::views::{AssessmentReport, QuestionCatalog};
use crate::error::AppError;

/// Router builder exposing the question catalog and the scoring endpoint.
/// Nothing submitted here is stored.
pub fn assessment_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/results", post(results_handler))
        .with_state(engine)
}

pub(crate) async fn questions_handler(State(engine): State<Arc<ScoringEngine>>) -> Response {
    let catalog = QuestionCatalog::from_bank(engine.bank());
    (StatusCode::OK, axum::Json(catalog)).into_response()
}

pub(crate) async fn results_handler(
    State(engine): State<Arc<ScoringEngine>>,
    payload: Result<axum::Json<SubmissionBatch>, JsonRejection>,
) -> Result<axum::Json<AssessmentReport>, AppError> {
    let axum::Json(batch) = payload.inspect_err(|rejection| {
        warn!(status = %rejection.status(), "assessment payload rejected");
    })?;

    let submitted = batch.responses.len();
    let responses = ResponseSet::from_submissions(engine.bank(), batch.responses, Utc::now())
        .inspect_err(|error| warn!(submitted, %error, "assessment responses rejected"))?;

    let result = engine.compute(&responses);
    info!(
        answered = responses.len(),
        recommendation = result.recommendation.label(),
        confidence = result.confidence_score,
        "assessment scored"
    );
    Ok(axum::Json(AssessmentReport::new(result)))
}
