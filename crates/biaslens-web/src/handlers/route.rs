//! POST /route — bias analysis followed by category→provider routing.

use std::time::Instant;

use axum::extract::{Json, State};
use serde::Serialize;
use serde_json::Value;

use biaslens_router::score::{normalize_analysis, normalized_highest};
use biaslens_router::selector::RoutingDecision;

use crate::error::ApiError;
use crate::handlers::TextInput;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// `None` when no bias category could be determined.
    pub routing_decision: Option<RoutingDecision>,
    pub bias_analysis: Value,
    pub response_time: String,
}

pub async fn route_text(
    State(state): State<SharedState>,
    Json(input): Json<TextInput>,
) -> Result<Json<RouteResponse>, ApiError> {
    let started = Instant::now();

    let raw = state.analysis.analyze(&input.text).await?;
    let highest = normalized_highest(&raw);
    let bias_analysis = normalize_analysis(&raw);

    let mut routing_decision = match highest.category.as_deref() {
        Some(category) => Some(state.selector.select(category, &highest.probability)),
        None => {
            tracing::warn!("no bias category detected, routing undetermined");
            None
        }
    };

    if let Some(decision) = routing_decision.as_mut() {
        tracing::info!(
            provider = %decision.selected_model,
            category = %decision.bias_category,
            confidence = %decision.confidence,
            "routing decision made"
        );
        if state.selector.is_default(&decision.selected_model) {
            decision.llm_response = Some(state.secondary.relay(&input.text).await?);
        }
    }

    Ok(Json(RouteResponse {
        routing_decision,
        bias_analysis,
        response_time: format!("{:.2} seconds", started.elapsed().as_secs_f64()),
    }))
}
