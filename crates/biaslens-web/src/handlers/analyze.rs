//! POST /analyze — bias analysis without routing.

use std::time::Instant;

use axum::extract::{Json, State};
use serde::Serialize;
use serde_json::Value;

use biaslens_router::score::normalize_analysis;

use crate::error::ApiError;
use crate::handlers::TextInput;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: Value,
    pub response_time: String,
}

pub async fn analyze_text(
    State(state): State<SharedState>,
    Json(input): Json<TextInput>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let started = Instant::now();

    let raw = state.analysis.analyze(&input.text).await?;
    let analysis = normalize_analysis(&raw);

    Ok(Json(AnalyzeResponse {
        analysis,
        response_time: format!("{:.2} seconds", started.elapsed().as_secs_f64()),
    }))
}
