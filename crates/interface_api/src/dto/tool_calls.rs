//! Tool call DTOs
//!
//! Mirrors the assistant's tool call payload:
//! `{"id": "...", "type": "function", "function": {"name": "...", "arguments": "..."}}`

use domain_underwriting::ToolCall;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ToolCallRequest {
    #[validate(length(min = 1, max = 128))]
    pub id: String,
    #[serde(rename = "type", default = "function_kind")]
    pub kind: String,
    #[validate(nested)]
    pub function: FunctionCall,
}

#[derive(Debug, Deserialize, Validate)]
pub struct FunctionCall {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    /// JSON-encoded string or object
    #[serde(default)]
    pub arguments: Value,
}

fn function_kind() -> String {
    "function".to_string()
}

impl From<ToolCallRequest> for ToolCall {
    fn from(request: ToolCallRequest) -> Self {
        ToolCall::new(request.id, request.function.name, request.function.arguments)
    }
}
