//! Axum route handlers for the Prediction API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::Deserialize;
use tracing::info_span;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::prediction::options::FormOptions;
use crate::prediction::service::Prediction;
use crate::presentation::{render_report, Currency, REPORT_FILE_NAME};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub currency: Currency,
}

impl PredictRequest {
    fn validate(&self) -> Result<(), AppError> {
        let years = self.profile.years_experience;
        if !years.is_finite() || years < 0.0 {
            return Err(AppError::Validation(format!(
                "years_experience must be a non-negative number, got {years}"
            )));
        }
        Ok(())
    }
}

fn run_prediction(state: &AppState, request: &PredictRequest) -> Result<Prediction, AppError> {
    request.validate()?;

    let span = info_span!("predict", request_id = %Uuid::new_v4());
    let prediction =
        span.in_scope(|| state.predictor.predict(&request.profile, request.currency))?;
    Ok(prediction)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/options
///
/// Choices for every categorical field, the experience range, and currencies.
pub async fn handle_options(State(state): State<AppState>) -> Json<FormOptions> {
    Json(state.predictor.options())
}

/// POST /api/v1/predict
///
/// Returns the salary/satisfaction result and the comparison overlay.
pub async fn handle_predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<Prediction>, AppError> {
    let Json(request) = payload?;
    let prediction = run_prediction(&state, &request)?;
    Ok(Json(prediction))
}

/// POST /api/v1/report
///
/// Runs the same prediction and returns it as a downloadable text report.
pub async fn handle_report(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let prediction = run_prediction(&state, &request)?;
    let report = render_report(&request.profile, &prediction.result, &Local::now());

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        report,
    )
        .into_response())
}
