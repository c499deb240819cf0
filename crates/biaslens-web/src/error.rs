//! API error type — maps the closed LlmError set onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use biaslens_llm::backend::LlmError;
use serde_json::json;

#[derive(Debug)]
pub struct ApiError(pub LlmError);

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self.0 {
            LlmError::InvalidReply(msg) => {
                format!("analysis reply was not valid structured data: {msg}")
            }
            LlmError::ApiError { status, message } => {
                format!("upstream API error [{status}]: {message}")
            }
            LlmError::Unavailable(msg) => format!("backend unavailable: {msg}"),
            LlmError::Http(e) => format!("upstream call failed: {e}"),
        };
        tracing::error!(%detail, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reply_maps_to_500_with_detail() {
        let err = ApiError(LlmError::InvalidReply("expected object".to_string()));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
