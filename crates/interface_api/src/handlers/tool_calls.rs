//! Tool call handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use domain_underwriting::{ToolCall, ToolOutput};

use crate::dto::tool_calls::ToolCallRequest;
use crate::{error::ApiError, AppState};

/// Answers one assistant tool call
///
/// Record problems come back as an `{"error": ...}` output with status 200
/// so the assistant can relay them; an unknown tool is a 404.
pub async fn answer_tool_call(
    State(state): State<AppState>,
    request: Result<Json<ToolCallRequest>, JsonRejection>,
) -> Result<Json<ToolOutput>, ApiError> {
    let Json(request) = request?;
    request.validate()?;
    if request.kind != "function" {
        return Err(ApiError::BadRequest(format!(
            "unsupported tool call type: {}",
            request.kind
        )));
    }

    let call = ToolCall::from(request);
    Ok(Json(state.dispatcher.dispatch(&call)?))
}
