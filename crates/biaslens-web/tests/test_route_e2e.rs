//! End-to-end handler tests against stubbed LLM backends.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use biaslens_llm::backend::{LlmBackend, LlmError, LlmRequest, LlmResponse};
use biaslens_llm::secondary::SecondaryProvider;
use biaslens_web::config::Config;
use biaslens_web::handlers::route::route_text;
use biaslens_web::handlers::TextInput;
use biaslens_web::state::{AppState, SharedState};

struct StubBackend {
    reply: String,
}

#[async_trait]
impl LlmBackend for StubBackend {
    async fn complete(&self, _req: LlmRequest) -> Result<LlmResponse, LlmError> {
        Ok(LlmResponse {
            content: self.reply.clone(),
            model: "stub".to_string(),
            prompt_tokens: 0,
            completion_tokens: 0,
        })
    }
    fn model_id(&self) -> &str { "stub" }
    fn name(&self) -> &'static str { "stub" }
    fn is_local(&self) -> bool { true }
}

struct StubSecondary;

#[async_trait]
impl SecondaryProvider for StubSecondary {
    async fn relay(&self, _text: &str) -> Result<String, LlmError> {
        Ok("secondary reply".to_string())
    }
    fn provider_name(&self) -> &str { "gpt4" }
}

fn state_with_reply(reply: &str) -> SharedState {
    Arc::new(AppState::new(
        Config::default(),
        Arc::new(StubBackend { reply: reply.to_string() }),
        Arc::new(StubSecondary),
    ))
}

fn input(text: &str) -> Json<TextInput> {
    Json(TextInput { text: text.to_string() })
}

#[tokio::test]
async fn test_race_routes_to_claude_without_secondary_call() {
    let reply = serde_json::json!({
        "race": {"probability": 0.9},
        "gender": {"probability": 0.4},
        "age": {"probability": 0.1},
        "others": {"probability": 0.05},
        "Note": "race bias dominates"
    })
    .to_string();

    let state = state_with_reply(&reply);
    let Json(resp) = route_text(State(state), input("some biased text"))
        .await
        .expect("routing should succeed");

    let decision = resp.routing_decision.expect("decision expected");
    assert_eq!(decision.selected_model, "claude");
    assert_eq!(decision.bias_category, "race");
    assert_eq!(decision.model_accuracy, Some(88));
    assert_eq!(decision.confidence, "90.0");
    // claude is not the default provider, so no secondary call happened
    assert!(decision.llm_response.is_none());

    assert_eq!(resp.bias_analysis["race"]["probability"], "90.0");
    assert_eq!(resp.bias_analysis["gender"]["probability"], "40.0");
    assert_eq!(
        resp.bias_analysis["highest_probability_category"]["category"],
        "race"
    );
    assert_eq!(resp.bias_analysis["Note"], "race bias dominates");
    assert!(resp.response_time.ends_with(" seconds"));
}

#[tokio::test]
async fn test_confidence_matches_reported_probability() {
    // 0.88 must surface as "88.0" in both the decision and the analysis,
    // not get re-rounded through the scan's one-decimal output
    let reply = serde_json::json!({
        "race": {"probability": 0.88},
        "gender": {"probability": 0.4},
        "Note": ""
    })
    .to_string();

    let state = state_with_reply(&reply);
    let Json(resp) = route_text(State(state), input("text")).await.unwrap();

    let decision = resp.routing_decision.expect("decision expected");
    assert_eq!(decision.confidence, "88.0");
    assert_eq!(resp.bias_analysis["race"]["probability"], "88.0");
    assert_eq!(
        resp.bias_analysis["highest_probability_category"]["probability"],
        "88.0"
    );
}

#[tokio::test]
async fn test_gender_routes_to_default_and_invokes_secondary() {
    let reply = serde_json::json!({
        "gender": {"probability": 0.8},
        "race": {"probability": 0.3},
        "Note": "gendered wording"
    })
    .to_string();

    let state = state_with_reply(&reply);
    let Json(resp) = route_text(State(state), input("some text"))
        .await
        .expect("routing should succeed");

    let decision = resp.routing_decision.expect("decision expected");
    assert_eq!(decision.selected_model, "gpt4");
    assert_eq!(decision.model_accuracy, Some(90));
    assert_eq!(decision.llm_response.as_deref(), Some("secondary reply"));
}

#[tokio::test]
async fn test_missing_categories_are_zero_filled() {
    let reply = serde_json::json!({
        "nationality": {"probability": 0.6},
        "Note": ""
    })
    .to_string();

    let state = state_with_reply(&reply);
    let Json(resp) = route_text(State(state), input("text")).await.unwrap();

    assert_eq!(resp.bias_analysis["disability"]["probability"], "0.0");
    assert_eq!(resp.bias_analysis["others"]["probability"], "0.0");
    let decision = resp.routing_decision.unwrap();
    assert_eq!(decision.selected_model, "gemini");
    assert_eq!(decision.model_accuracy, Some(85));
}

#[tokio::test]
async fn test_no_qualifying_category_leaves_routing_undetermined() {
    let reply = serde_json::json!({ "Note": "nothing detected" }).to_string();

    let state = state_with_reply(&reply);
    let Json(resp) = route_text(State(state), input("harmless text"))
        .await
        .expect("analysis succeeds even without findings");

    assert!(resp.routing_decision.is_none());
    assert_eq!(resp.bias_analysis["race"]["probability"], "0.0");
    // the analysis agrees with the undetermined routing
    assert!(resp.bias_analysis["highest_probability_category"]["category"].is_null());
}

#[tokio::test]
async fn test_unparseable_reply_maps_to_500() {
    let state = state_with_reply("Sorry, I refuse to emit JSON.");
    let err = route_text(State(state), input("text"))
        .await
        .err()
        .expect("parse failure expected");

    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
