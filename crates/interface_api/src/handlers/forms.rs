//! Form catalogue handlers

use axum::{extract::{Path, State}, Json};
use serde_json::Value;

use domain_underwriting::{FormSchema, FormType};

use crate::dto::forms::{FormDetail, FormSummary};
use crate::{error::ApiError, AppState};

/// Lists the forms with registered rules
pub async fn list_forms(State(state): State<AppState>) -> Json<Vec<FormSummary>> {
    let forms = state
        .evaluator
        .registry()
        .forms()
        .into_iter()
        .map(FormSummary::from)
        .collect();
    Json(forms)
}

/// Gets one form's schema and tool definition
///
/// The path accepts `130`, `acord_130`, a tool name or a form key.
pub async fn get_form(Path(form): Path<String>) -> Result<Json<FormDetail>, ApiError> {
    let form_type: FormType = form.parse()?;
    Ok(Json(FormDetail::from(FormSchema::for_form(form_type))))
}

/// Lists every function tool definition
pub async fn list_tools() -> Json<Vec<Value>> {
    Json(domain_underwriting::tool_definitions())
}
