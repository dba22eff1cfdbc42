//! Route handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use legible_api::{AnalysisReport, AnalyzeRequest};
use legible_core::CorrectionError;
use std::sync::Arc;
use tracing::debug;

use super::{AppState, HttpError};

pub(super) const BANNER: &str =
    "Text Analysis API is running. Use /analyze endpoint with POST requests.";

pub(super) async fn home() -> &'static str {
    BANNER
}

pub(super) async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, HttpError> {
    let Json(request) = payload?;

    let analyzer = Arc::clone(&state.analyzer);
    let measurement =
        tokio::task::spawn_blocking(move || analyzer.measure(request.text.as_deref())).await??;
    debug!(
        words = measurement.metrics.statistics.word_count,
        sentences = measurement.metrics.statistics.sentence_count,
        "measured text"
    );

    let corrector = state.analyzer.corrector();
    let text = measurement.text.clone();
    let task = tokio::task::spawn_blocking(move || corrector.correct(&text));

    // the blocking task is not cancelled on timeout, its result is dropped
    let outcome = match tokio::time::timeout(state.correction_timeout, task).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(join_error)) => Err(CorrectionError::Failed(format!(
            "correction task failed: {join_error}"
        ))),
        Err(_) => Err(CorrectionError::TimedOut {
            millis: u64::try_from(state.correction_timeout.as_millis()).unwrap_or(u64::MAX),
        }),
    };

    let corrected = state.analyzer.apply_fallback(&measurement.text, outcome)?;
    Ok(Json(measurement.into_report(corrected)))
}
