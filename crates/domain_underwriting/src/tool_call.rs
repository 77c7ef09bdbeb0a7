//! Function-tool adapter
//!
//! Exposes every form as an OpenAI-style function tool and answers tool
//! calls produced by an assistant. Arguments arrive either as a JSON-encoded
//! string or as an already decoded object.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::case::UnderwritingCase;
use crate::decider::UnderwritingResult;
use crate::error::UnderwritingError;
use crate::evaluator::RiskEvaluator;
use crate::form_type::FormType;
use crate::record::{json_kind, SubmittedRecord};
use crate::schema::FormSchema;

/// One function call requested by the assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Decodes the arguments into a record
    pub fn record(&self) -> Result<SubmittedRecord, UnderwritingError> {
        match &self.arguments {
            Value::String(raw) => {
                let value: Value = serde_json::from_str(raw)
                    .map_err(|e| UnderwritingError::MalformedArguments(e.to_string()))?;
                SubmittedRecord::from_value(value)
                    .map_err(|e| UnderwritingError::MalformedArguments(e.to_string()))
            }
            Value::Object(fields) => Ok(SubmittedRecord::new(fields.clone())),
            Value::Null => Ok(SubmittedRecord::default()),
            other => Err(UnderwritingError::MalformedArguments(format!(
                "expected a JSON object, got {}",
                json_kind(other)
            ))),
        }
    }
}

/// Answer to a tool call, keyed by the call id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub tool_call_id: String,
    /// JSON-encoded result or error
    pub output: String,
}

/// Function definitions for every form, in canonical order
pub fn tool_definitions() -> Vec<Value> {
    FormSchema::all().iter().map(FormSchema::tool_definition).collect()
}

/// Runs tool calls against fresh underwriting cases
#[derive(Debug, Clone, Default)]
pub struct ToolDispatcher {
    evaluator: RiskEvaluator,
}

impl ToolDispatcher {
    pub fn new(evaluator: RiskEvaluator) -> Self {
        Self { evaluator }
    }

    /// Answers one tool call
    ///
    /// Input problems (malformed arguments, missing fields, wrong types) are
    /// returned to the assistant as an `{"error": ...}` output so it can ask
    /// the applicant again.
    ///
    /// # Errors
    ///
    /// `UnknownFormType` when the tool name does not belong to any form.
    pub fn dispatch(&self, call: &ToolCall) -> Result<ToolOutput, UnderwritingError> {
        let form_type = FormType::from_tool_name(&call.name)
            .ok_or_else(|| UnderwritingError::unknown_form(&call.name))?;

        let output = match self.run(form_type, call) {
            Ok(result) => {
                info!(tool_call_id = %call.id, form = %form_type, decision = %result.decision, "Tool call answered");
                serde_json::to_string(&result)
            }
            Err(err) => {
                warn!(tool_call_id = %call.id, form = %form_type, error = %err, "Tool call rejected");
                serde_json::to_string(&json!({ "error": err.to_string() }))
            }
        }
        .map_err(|e| UnderwritingError::MalformedArguments(e.to_string()))?;

        Ok(ToolOutput {
            tool_call_id: call.id.clone(),
            output,
        })
    }

    /// Answers several calls in order
    pub fn dispatch_all(&self, calls: &[ToolCall]) -> Result<Vec<ToolOutput>, UnderwritingError> {
        calls.iter().map(|call| self.dispatch(call)).collect()
    }

    fn run(&self, form_type: FormType, call: &ToolCall) -> Result<UnderwritingResult, UnderwritingError> {
        let mut case = UnderwritingCase::with_evaluator(self.evaluator.clone());
        case.submit(form_type, call.record()?)?;
        case.underwrite()
    }
}
